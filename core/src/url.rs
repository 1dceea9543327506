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

/// Join base, middle path and endpoint into one URL.
///
/// Exactly one slash separates the segments, no matter how many the inputs
/// carry. The result is not validated: a malformed base stays malformed and
/// only fails once the request is sent.
///
/// ```
/// use reqcraft_core::compose_url;
///
/// assert_eq!(
///     compose_url("https://h.co/", "/a/b/", "/c"),
///     "https://h.co/a/b/c"
/// );
/// ```
pub fn compose_url(base: &str, middle: &str, endpoint: &str) -> String {
    let base = base.trim_end_matches('/');
    let middle = middle.trim_matches('/');
    let endpoint = endpoint.trim_start_matches('/');

    let mut s = String::with_capacity(base.len() + middle.len() + endpoint.len() + 2);
    s.push_str(base);
    s.push('/');
    s.push_str(middle);
    s.push('/');
    s.push_str(endpoint);
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("https://h.co/", "/a/b/", "/c", "https://h.co/a/b/c"; "single slashes")]
    #[test_case("https://h.co///", "///a/b///", "///c", "https://h.co/a/b/c"; "repeated slashes")]
    #[test_case("https://h.co", "a/b", "c", "https://h.co/a/b/c"; "no slashes")]
    #[test_case(
        "https://demo.trcloud.co/",
        "/application/api-connector2/end-point/",
        "so/read.php",
        "https://demo.trcloud.co/application/api-connector2/end-point/so/read.php";
        "trcloud defaults"
    )]
    #[test_case("https://h.co", "", "c", "https://h.co//c"; "empty middle keeps both wrappers")]
    #[test_case("https://h.co", "a", "c/", "https://h.co/a/c/"; "endpoint trailing slash kept")]
    #[test_case("h.co", "a", "c", "h.co/a/c"; "malformed base passes through")]
    fn test_compose_url(base: &str, middle: &str, endpoint: &str, expected: &str) {
        assert_eq!(compose_url(base, middle, endpoint), expected);
    }
}
