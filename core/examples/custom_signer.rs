use std::time::Duration;

use async_trait::async_trait;
use http::request::Parts;

use aex_core::{
    Context, Error, OsEnv, ProvideCredential, Result, SignRequest, Signer, SigningCredential,
};

// Define a custom credential type
#[derive(Clone, Debug)]
struct ApiKeyCredential {
    key: String,
    secret: String,
}

impl SigningCredential for ApiKeyCredential {
    fn is_valid(&self) -> bool {
        !self.key.is_empty() && !self.secret.is_empty()
    }
}

// Implement a credential loader that reads the environment
#[derive(Debug)]
struct EnvLoader;

#[async_trait]
impl ProvideCredential for EnvLoader {
    type Credential = ApiKeyCredential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let key = ctx.env_var("MY_API_KEY").unwrap_or_default();
        let secret = ctx.env_var("MY_API_SECRET").unwrap_or_default();

        // For demo purposes, fall back to dummy credentials
        if key.is_empty() || secret.is_empty() {
            println!("No credentials found in environment, using demo credentials");
            return Ok(Some(ApiKeyCredential {
                key: "demo-api-key".to_string(),
                secret: "demo-api-secret".to_string(),
            }));
        }

        Ok(Some(ApiKeyCredential { key, secret }))
    }
}

// Implement a request builder
#[derive(Debug)]
struct HeaderSigner;

#[async_trait]
impl SignRequest for HeaderSigner {
    type Credential = ApiKeyCredential;

    async fn sign_request(
        &self,
        _ctx: &Context,
        req: &mut Parts,
        credential: Option<&Self::Credential>,
        _expires_in: Option<Duration>,
    ) -> Result<()> {
        let cred =
            credential.ok_or_else(|| Error::credential_invalid("no credential provided"))?;

        req.headers.insert("x-api-key", cred.key.parse()?);

        // A real scheme would derive this from the request and the secret
        req.headers
            .insert("x-api-signature", "calculated-signature".parse()?);

        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Environment access comes from the process env, no transport needed
    // for signing alone
    let ctx = Context::new().with_env(OsEnv);

    // Create the signer from the loader and builder
    let signer = Signer::new(ctx, EnvLoader, HeaderSigner);

    // Create a request to sign
    let mut parts = http::Request::builder()
        .method("GET")
        .uri("https://api.example.com/v1/users")
        .body(())
        .expect("request must be valid")
        .into_parts()
        .0;

    // Sign the request
    signer.sign(&mut parts, None).await?;
    println!("Request signed successfully!");
    println!("Headers: {:?}", parts.headers);

    Ok(())
}
