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

//! Best-effort import of a `curl` invocation.
//!
//! Only method, URL, headers and a single data payload are understood. This is
//! not a shell grammar: quotes are only recognised at the start of a word,
//! there are no escapes, and anything unexpected simply leaves the field unset.
//! Flag names are matched without regard to case.

use http::Method;
use log::debug;

use crate::Headers;

/// Body flags in the order they are honored.
const BODY_FLAGS: [&str; 3] = ["--data-raw", "--data", "-d"];

/// Request fields found in an imported command.
///
/// Every field is independently optional; `None` (or an empty header map)
/// means "not found", never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportedCommand {
    /// Method from the first `-X <TOKEN>`, upper-cased.
    pub method: Option<Method>,
    /// The URL following the `curl` verb, else the first `http(s)://` anywhere.
    pub url: Option<String>,
    /// Headers from every `-H 'Key: Value'`; later keys overwrite earlier ones.
    pub headers: Headers,
    /// The first quoted payload of `--data-raw`, `--data` or `-d`, in that priority.
    pub body: Option<String>,
}

impl ImportedCommand {
    /// Parse a command line. Never fails.
    pub fn parse(command: &str) -> Self {
        let tokens = tokenize(command);

        let imported = ImportedCommand {
            method: parse_method(&tokens),
            url: parse_url(&tokens),
            headers: parse_headers(&tokens),
            body: parse_body(&tokens),
        };
        debug!(
            "imported command: method={:?} url={:?} headers={} body={}",
            imported.method,
            imported.url,
            imported.headers.len(),
            imported.body.is_some()
        );
        imported
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Token<'a> {
    text: &'a str,
    /// The quote character the word started with.
    quote: Option<char>,
    /// Whether the opening quote found its partner.
    closed: bool,
}

impl Token<'_> {
    /// Flags match ignoring ASCII case, so `-x` reads as `-X`.
    fn is_flag(&self, flag: &str) -> bool {
        self.quote.is_none() && self.text.eq_ignore_ascii_case(flag)
    }

    fn is_quoted(&self) -> bool {
        self.quote.is_some() && self.closed
    }
}

/// Split on whitespace, treating a word that starts with `'` or `"` as running
/// up to the next identical quote.
fn tokenize(s: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut rest = s;

    loop {
        rest = rest.trim_start();
        let Some(first) = rest.chars().next() else {
            break;
        };

        if first == '\'' || first == '"' {
            let inner = &rest[1..];
            match inner.find(first) {
                Some(end) => {
                    tokens.push(Token {
                        text: &inner[..end],
                        quote: Some(first),
                        closed: true,
                    });
                    rest = &inner[end + 1..];
                }
                None => {
                    tokens.push(Token {
                        text: inner,
                        quote: Some(first),
                        closed: false,
                    });
                    rest = "";
                }
            }
        } else {
            let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
            tokens.push(Token {
                text: &rest[..end],
                quote: None,
                closed: true,
            });
            rest = &rest[end..];
        }
    }

    tokens
}

fn parse_method(tokens: &[Token<'_>]) -> Option<Method> {
    tokens.windows(2).find_map(|w| {
        if !w[0].is_flag("-X") {
            return None;
        }
        let letters = w[1]
            .text
            .find(|c: char| !c.is_ascii_alphabetic())
            .map_or(w[1].text, |end| &w[1].text[..end]);
        if letters.is_empty() {
            return None;
        }
        Method::from_bytes(letters.to_ascii_uppercase().as_bytes()).ok()
    })
}

fn parse_url(tokens: &[Token<'_>]) -> Option<String> {
    let after_verb = tokens.windows(2).find_map(|w| {
        if w[0].quote.is_none() && w[0].text.eq_ignore_ascii_case("curl") {
            find_url(w[1].text).filter(|(start, _)| *start == 0)
        } else {
            None
        }
    });

    after_verb
        .or_else(|| tokens.iter().find_map(|t| find_url(t.text)))
        .map(|(_, url)| url.to_string())
}

/// Find the first `http://` or `https://` in a word, returning its offset and
/// the URL up to the next whitespace or quote.
fn find_url(text: &str) -> Option<(usize, &str)> {
    let lower = text.to_ascii_lowercase();
    let start = match (lower.find("http://"), lower.find("https://")) {
        (Some(a), Some(b)) => a.min(b),
        (a, b) => a.or(b)?,
    };

    let url = &text[start..];
    let end = url
        .find(|c: char| c.is_whitespace() || c == '\'' || c == '"')
        .unwrap_or(url.len());
    Some((start, &url[..end]))
}

fn parse_headers(tokens: &[Token<'_>]) -> Headers {
    let mut headers = Headers::new();

    for w in tokens.windows(2) {
        if !w[0].is_flag("-H") {
            continue;
        }
        let Some((key, value)) = w[1].text.split_once(':') else {
            continue;
        };
        if key.is_empty() || key.contains(['\'', '"']) {
            continue;
        }
        let value = value.trim_start();
        let value = value
            .find(['\'', '"'])
            .map_or(value, |end| &value[..end]);
        if value.is_empty() {
            continue;
        }
        headers.insert(key.to_string(), value.to_string());
    }

    headers
}

fn parse_body(tokens: &[Token<'_>]) -> Option<String> {
    BODY_FLAGS.iter().find_map(|flag| {
        tokens
            .windows(2)
            .find(|w| w[0].is_flag(flag) && w[1].is_quoted())
            .map(|w| w[1].text.to_string())
    })
}
