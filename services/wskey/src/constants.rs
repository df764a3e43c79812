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

use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;

// Env values used by the wskey service.
pub const OCLC_WSKEY_CLIENT_ID: &str = "OCLC_WSKEY_CLIENT_ID";
pub const OCLC_WSKEY_SECRET: &str = "OCLC_WSKEY_SECRET";

// Every wskey signature is computed against this fixed authority, never
// against the host the request actually targets.
pub const SIGNING_HOST: &str = "www.oclc.org";
pub const SIGNING_PORT: u16 = 443;
pub const SIGNING_PATH: &str = "/wskey";

// Scheme identifier opening the Authorization header value.
pub const SCHEME_ID: &str = "http://www.worldcat.org/wskey/v2/hmac/v1";

/// AsciiSet covering the strict RFC 3986 unreserved set.
///
/// - Encode every byte except 'A'-'Z', 'a'-'z', '0'-'9', '-', '.', '_', and '~'.
pub static WSKEY_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');
