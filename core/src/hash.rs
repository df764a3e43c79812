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

//! Hash related utils.

use crate::Error;
use base64::prelude::BASE64_STANDARD;
use base64::Engine;
use hmac::Hmac;
use hmac::Mac;
use sha2::Sha256;

/// Base64 encode
pub fn base64_encode(content: &[u8]) -> String {
    BASE64_STANDARD.encode(content)
}

/// Base64 decode
pub fn base64_decode(content: &str) -> crate::Result<Vec<u8>> {
    BASE64_STANDARD
        .decode(content)
        .map_err(|e| Error::unexpected("base64 decode failed").with_source(e))
}

/// Base64 encoded HMAC with SHA256 hash.
pub fn base64_hmac_sha256(key: &[u8], content: &[u8]) -> String {
    // SAFETY: HMAC's new_from_slice always returns Ok - it handles any key length
    let mut h = Hmac::<Sha256>::new_from_slice(key).unwrap();
    h.update(content);

    base64_encode(&h.finalize().into_bytes())
}

/// Base64 encoded HMAC-SHA256 keyed with the empty key, used as a plain
/// content digest.
///
/// This is not a signature. Keep it separate from [`base64_hmac_sha256`] so
/// a signing secret can never end up keying a digest by accident.
pub fn base64_body_digest(content: &[u8]) -> String {
    // SAFETY: HMAC's new_from_slice always returns Ok - it handles any key length
    let mut h = Hmac::<Sha256>::new_from_slice(b"").unwrap();
    h.update(content);

    base64_encode(&h.finalize().into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Test vectors from RFC 4231 section 4.
    #[test]
    fn test_base64_hmac_sha256() {
        let cases = vec![
            (
                vec![0x0bu8; 20],
                "Hi There".as_bytes().to_vec(),
                "sDRMYdjbOFNcqK/OrwvxK4gdwgDJgz2nJuk3bC4yz/c=",
            ),
            (
                "Jefe".as_bytes().to_vec(),
                "what do ya want for nothing?".as_bytes().to_vec(),
                "W9zBRr9gdU5qBCQmCJV1x1oAPwidJzmDnexYuWTsOEM=",
            ),
        ];

        for (key, content, expected) in cases {
            assert_eq!(base64_hmac_sha256(&key, &content), expected);
        }
    }

    #[test]
    fn test_base64_body_digest() {
        assert_eq!(
            base64_body_digest(b""),
            "thNnmggU2ex3L5XXeMNfxf8Wl8STcVZTxscSFEKSxa0="
        );
        assert_eq!(
            base64_body_digest(b"hello world"),
            "wupjTJk/BQSCtOYkMiQIf3wjvdPAerGkXpohxi+tmU4="
        );
        // The digest key is fixed: it must match an HMAC with an empty key,
        // not one keyed with whatever secret is in scope.
        assert_eq!(base64_body_digest(b""), base64_hmac_sha256(b"", b""));
    }

    #[test]
    fn test_base64_round_trip() {
        let content = b"article exchange".to_vec();
        let encoded = base64_encode(&content);
        assert_eq!(base64_decode(&encoded).unwrap(), content);
        assert!(base64_decode("not base64!").is_err());
    }
}
