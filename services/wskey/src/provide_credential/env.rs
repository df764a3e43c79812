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

use crate::constants::*;
use crate::credential::Credential;

/// EnvCredentialProvider loads the wskey pair from environment variables.
///
/// Reads [`OCLC_WSKEY_CLIENT_ID`] and [`OCLC_WSKEY_SECRET`]. Returns
/// `Ok(None)` when either is missing so the next provider in a chain can
/// take over.
#[derive(Debug, Default, Clone)]
pub struct EnvCredentialProvider;

impl EnvCredentialProvider {
    /// Create a new environment credential provider.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProvideCredential for EnvCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let (Some(client_id), Some(secret)) = (
            ctx.env_var(OCLC_WSKEY_CLIENT_ID),
            ctx.env_var(OCLC_WSKEY_SECRET),
        ) else {
            return Ok(None);
        };

        Ok(Some(Credential::new(&client_id, &secret)))
    }
}
