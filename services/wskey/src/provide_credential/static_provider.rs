// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use async_trait::async_trait;

use aex_core::Context;
use aex_core::ProvideCredential;
use aex_core::Result;

use crate::credential::Credential;

/// Static credential provider that returns a fixed credential.
///
/// This is useful when the wskey pair is known ahead of time, for
/// example from a secret manager or a test fixture.
#[derive(Debug, Clone)]
pub struct StaticCredentialProvider {
    credential: Credential,
}

impl StaticCredentialProvider {
    /// Create a new static credential provider.
    pub fn new(client_id: &str, secret: &str) -> Self {
        Self {
            credential: Credential::new(client_id, secret),
        }
    }
}

#[async_trait]
impl ProvideCredential for StaticCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
        Ok(Some(self.credential.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_provider() {
        let provider = StaticCredentialProvider::new("client-id", "client-secret");
        let ctx = Context::new();

        let cred = provider
            .provide_credential(&ctx)
            .await
            .expect("provider must not fail")
            .expect("credential must be present");

        assert_eq!("client-id", &cred.client_id);
        assert_eq!("client-secret", &cred.secret);
    }
}
