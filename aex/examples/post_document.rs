use anyhow::Result;
use aex::wskey::{DefaultCredentialProvider, RequestSigner};
use aex::{Client, Context, DefaultContext, ExchangeRequest, Signer};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    // Create a default context implementation
    let ctx_impl = DefaultContext::new();

    // Create a Context from the implementation
    let ctx = Context::new()
        .with_http_send(ctx_impl.clone())
        .with_env(ctx_impl);

    // Create credential loader, reads OCLC_WSKEY_CLIENT_ID and
    // OCLC_WSKEY_SECRET from the environment
    let loader = DefaultCredentialProvider::new();

    // Create the wskey request builder
    let builder = RequestSigner::new();

    // Create the signer and the client
    let signer = Signer::new(ctx.clone(), loader, builder);
    let client = Client::new(ctx, signer);

    // Describe the loan the document answers
    let request = ExchangeRequest::new("100-200-300", "document-password")
        .with_requester_symbol("ZXC")
        .with_requester_email("ill@example.edu")
        .with_journal_title("Journal of Testing")
        .with_article_title("On Testing")
        .with_article_pages("1-10");

    // Upload a document from disk
    let resp = client.post_document(&request, "article.pdf").await?;
    println!("Document filed at: {}", resp.access.url);
    println!("Retrieval password: {}", resp.access.password);

    Ok(())
}
