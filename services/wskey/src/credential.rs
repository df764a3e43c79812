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

use std::fmt::Debug;
use std::fmt::Formatter;

use aex_core::utils::Redact;
use aex_core::SigningCredential;

/// Credential for the wskey scheme.
#[derive(Clone, Default)]
pub struct Credential {
    /// Public wskey client id, sent in clear inside the Authorization header.
    pub client_id: String,
    /// Shared secret keying the request signature. Never sent on the wire.
    pub secret: String,
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("client_id", &self.client_id)
            .field("secret", &Redact::from(&self.secret))
            .finish()
    }
}

impl Credential {
    /// Create a new credential.
    pub fn new(client_id: &str, secret: &str) -> Self {
        Self {
            client_id: client_id.to_string(),
            secret: secret.to_string(),
        }
    }
}

impl SigningCredential for Credential {
    fn is_valid(&self) -> bool {
        !self.client_id.is_empty() && !self.secret.is_empty()
    }
}
