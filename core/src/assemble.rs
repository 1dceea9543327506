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

use http::header::CONTENT_TYPE;
use http::Method;
use log::debug;
use serde_json::Value;

use crate::compose_url;
use crate::{Body, BodyMode, Error, Fields, ImportedCommand, RequestDescriptor, RequestParams};
use crate::Result;

const CONTENT_TYPE_KEY: &str = "Content-Type";
const JSON_CONTENT_TYPE: &str = "application/json";
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Resolve parameters, and the imported command if applied, into a request.
///
/// ## Precedence
///
/// - method and URL: imported values win over explicit ones.
/// - headers: explicit headers win, imported headers only fill missing keys.
/// - json/form body: imported JSON object first, explicit parameters overlaid.
/// - raw body: imported body first, explicit raw text otherwise.
///
/// ## Errors
///
/// An imported body that is not a JSON object fails json and form assembly.
pub fn assemble(params: &RequestParams) -> Result<RequestDescriptor> {
    let imported = params.import.applied_command().map(ImportedCommand::parse);
    if imported.is_none() && params.import.enabled && !params.import.command.trim().is_empty() {
        let skipped = ImportedCommand::parse(&params.import.command);
        debug!("command import not applied, discarding {skipped:?}");
    }

    let url = compose_url(&params.base_url, &params.mid_path, &params.endpoint_path);
    let (method, url, imported_headers, imported_body) = match imported {
        Some(cmd) => (
            cmd.method.unwrap_or_else(|| params.method.clone()),
            cmd.url.unwrap_or(url),
            cmd.headers,
            cmd.body,
        ),
        None => (params.method.clone(), url, Default::default(), None),
    };

    let mut req = RequestDescriptor::new(method, url);

    if params.send_headers {
        for h in &params.headers {
            req.header_insert(h.name.as_str(), h.value.as_str());
        }
    }
    for (k, v) in imported_headers {
        req.header_insert_if_absent(k, v);
    }

    if req.method == Method::POST && (params.send_body || imported_body.is_some()) {
        req.body = build_body(&mut req, params, imported_body)?;
    }

    debug!(
        "assembled {} {} with {} headers and {} body",
        req.method,
        req.url,
        req.headers.len(),
        req.body_mode()
    );
    Ok(req)
}

fn build_body(
    req: &mut RequestDescriptor,
    params: &RequestParams,
    imported_body: Option<String>,
) -> Result<Body> {
    let body = match params.body_mode {
        BodyMode::Json | BodyMode::Form => {
            let mut fields = match imported_body {
                Some(s) => parse_fields(&s)?,
                None => Fields::new(),
            };
            for p in &params.body_parameters {
                fields.insert(p.name.clone(), Value::String(p.value.clone()));
            }
            req.body_parameters = params.body_parameters.clone();

            if params.body_mode == BodyMode::Json {
                set_default_content_type(req, JSON_CONTENT_TYPE);
                Body::Json(fields)
            } else {
                set_default_content_type(req, FORM_CONTENT_TYPE);
                Body::Form(fields)
            }
        }
        BodyMode::Raw => {
            let text = imported_body.unwrap_or_else(|| params.raw_body.clone());
            if !params.raw_content_type.is_empty() {
                req.header_replace_ignore_case(CONTENT_TYPE_KEY, params.raw_content_type.as_str());
            }
            Body::Raw(text)
        }
        BodyMode::None => Body::None,
    };

    Ok(body)
}

fn parse_fields(s: &str) -> Result<Fields> {
    match serde_json::from_str::<Value>(s) {
        Ok(Value::Object(fields)) => Ok(fields),
        Ok(_) => Err(Error::request_invalid(
            "imported body must be a JSON object",
        )),
        Err(e) => Err(Error::request_invalid(format!("imported body is not valid JSON: {e}"))
            .with_source(e)),
    }
}

fn set_default_content_type(req: &mut RequestDescriptor, value: &str) {
    if !req.header_contains_ignore_case(CONTENT_TYPE.as_str()) {
        req.header_insert(CONTENT_TYPE_KEY, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn params() -> RequestParams {
        RequestParams::new().with_url("https://h.co/", "/api/", "/items")
    }

    fn header_pairs(req: &RequestDescriptor) -> Vec<(&str, &str)> {
        req.headers
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect()
    }

    #[test]
    fn test_explicit_only() {
        let req = assemble(&params().with_method(Method::GET)).unwrap();
        assert_eq!(req.method, Method::GET);
        assert_eq!(req.url, "https://h.co/api/items");
        assert!(req.headers.is_empty());
        assert_eq!(req.body, Body::None);
    }

    #[test]
    fn test_import_overrides_method_and_url() {
        let req = assemble(
            &params()
                .with_method(Method::GET)
                .with_curl("curl -X POST https://other.co/x"),
        )
        .unwrap();
        assert_eq!(req.method, Method::POST);
        assert_eq!(req.url, "https://other.co/x");
    }

    #[test]
    fn test_import_missing_fields_keep_explicit() {
        let req = assemble(&params().with_method(Method::GET).with_curl("curl -H 'A: b'")).unwrap();
        assert_eq!(req.method, Method::GET);
        assert_eq!(req.url, "https://h.co/api/items");
        assert_eq!(header_pairs(&req), vec![("A", "b")]);
    }

    #[test]
    fn test_import_needs_apply() {
        let mut p = params().with_curl("curl -X GET https://other.co");
        p.import.apply = false;
        let req = assemble(&p).unwrap();
        assert_eq!(req.method, Method::POST);
        assert_eq!(req.url, "https://h.co/api/items");
    }

    #[test]
    fn test_explicit_headers_win() {
        let req = assemble(
            &params()
                .with_header("X", "1")
                .with_curl("curl https://h.co -H 'X: 2' -H 'Y: 3'"),
        )
        .unwrap();
        assert_eq!(header_pairs(&req), vec![("X", "1"), ("Y", "3")]);
    }

    #[test]
    fn test_headers_ignored_without_send_headers() {
        let mut p = params().with_header("X", "1");
        p.send_headers = false;
        let req = assemble(&p).unwrap();
        assert!(req.headers.is_empty());
    }

    #[test]
    fn test_json_body_overlays_imported() {
        let req = assemble(
            &params()
                .with_body_mode(BodyMode::Json)
                .with_body_parameter("b", "explicit")
                .with_body_parameter("c", "3")
                .with_curl(r#"curl https://h.co/x --data-raw '{"a":1,"b":"imported"}'"#),
        )
        .unwrap();

        assert_eq!(
            Value::Object(req.body.fields().unwrap().clone()),
            json!({"a": 1, "b": "explicit", "c": "3"})
        );
        assert_eq!(req.body_mode(), BodyMode::Json);
        assert_eq!(req.header_get("Content-Type"), Some("application/json"));
        assert_eq!(
            req.body_parameters
                .iter()
                .map(|p| (p.name.as_str(), p.value.as_str()))
                .collect::<Vec<_>>(),
            vec![("b", "explicit"), ("c", "3")]
        );
    }

    #[test]
    fn test_form_body_default_content_type() {
        let req = assemble(
            &params()
                .with_body_mode(BodyMode::Form)
                .with_body_parameter("a", "1"),
        )
        .unwrap();
        assert_eq!(req.body_mode(), BodyMode::Form);
        assert_eq!(
            req.header_get("Content-Type"),
            Some("application/x-www-form-urlencoded")
        );
    }

    #[test]
    fn test_caller_content_type_kept() {
        let req = assemble(
            &params()
                .with_header("content-type", "application/vnd.api+json")
                .with_body_mode(BodyMode::Json),
        )
        .unwrap();
        assert_eq!(
            header_pairs(&req),
            vec![("content-type", "application/vnd.api+json")]
        );
    }

    #[test]
    fn test_imported_body_must_be_json_object() {
        let err = assemble(
            &params()
                .with_body_mode(BodyMode::Json)
                .with_curl("curl https://h.co -d 'not json'"),
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RequestInvalid);

        let err = assemble(
            &params()
                .with_body_mode(BodyMode::Form)
                .with_curl("curl https://h.co -d '[1,2]'"),
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RequestInvalid);
    }

    #[test]
    fn test_imported_body_turns_body_on() {
        let req = assemble(&params().with_curl(r#"curl https://h.co -d '{"a":"b"}'"#)).unwrap();
        assert!(!params().send_body);
        assert_eq!(req.body_mode(), BodyMode::Json);
    }

    #[test]
    fn test_raw_body_prefers_imported() {
        let req = assemble(
            &params()
                .with_raw_body("explicit", "text/csv")
                .with_curl("curl https://h.co -d 'not json at all'"),
        )
        .unwrap();
        assert_eq!(req.body, Body::Raw("not json at all".to_string()));
        assert_eq!(req.header_get("Content-Type"), Some("text/csv"));

        let req = assemble(&params().with_raw_body("a,b\n1,2", "text/csv")).unwrap();
        assert_eq!(req.body, Body::Raw("a,b\n1,2".to_string()));
    }

    #[test]
    fn test_raw_content_type_overrides_header() {
        let req = assemble(
            &params()
                .with_header("Content-Type", "application/json")
                .with_raw_body("hello", "text/plain"),
        )
        .unwrap();
        assert_eq!(header_pairs(&req), vec![("Content-Type", "text/plain")]);
    }

    #[test]
    fn test_none_mode_has_no_body() {
        let req = assemble(&params().with_body_mode(BodyMode::None)).unwrap();
        assert_eq!(req.body, Body::None);
        assert!(req.headers.is_empty());
    }

    #[test]
    fn test_body_only_for_post() {
        let req = assemble(
            &params()
                .with_method(Method::GET)
                .with_body_mode(BodyMode::Json)
                .with_body_parameter("a", "1"),
        )
        .unwrap();
        assert_eq!(req.body, Body::None);

        let req = assemble(
            &params()
                .with_body_mode(BodyMode::Json)
                .with_curl(r#"curl -X GET https://h.co -d '{"a":1}'"#),
        )
        .unwrap();
        assert_eq!(req.method, Method::GET);
        assert_eq!(req.body, Body::None);
    }
}
