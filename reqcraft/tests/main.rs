use std::sync::{Arc, Mutex};

use bytes::Bytes;
use pretty_assertions::assert_eq;
use reqcraft::{
    BodyMode, Context, Credential, Executor, HttpSend, ProvideCredential, RequestParams,
    RequestSigner, Result, Signer, TaggedCredentialProvider,
};
use serde_json::{json, Value};

#[derive(Debug, Default, Clone)]
struct RecordingHttpSend {
    seen: Arc<Mutex<Vec<http::Request<Bytes>>>>,
}

impl RecordingHttpSend {
    fn take(&self) -> Vec<http::Request<Bytes>> {
        std::mem::take(&mut *self.seen.lock().unwrap())
    }
}

#[async_trait::async_trait]
impl HttpSend for RecordingHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        self.seen.lock().unwrap().push(req);
        Ok(http::Response::builder()
            .status(200)
            .body(Bytes::from_static(br#"{"ok":true}"#))?)
    }
}

/// Hands out whatever credential is currently stored.
#[derive(Debug, Clone)]
struct SwappableProvider(Arc<Mutex<Credential>>);

#[async_trait::async_trait]
impl ProvideCredential for SwappableProvider {
    type Credential = Credential;

    async fn provide_credential(&self, _: &Context) -> Result<Option<Credential>> {
        Ok(Some(self.0.lock().unwrap().clone()))
    }
}

fn params() -> RequestParams {
    RequestParams::new()
        .with_url("https://demo.trcloud.co", "/application/api-connector2/end-point/", "so/read.php")
        .with_body_mode(BodyMode::Json)
        .with_body_parameter("doc_no", "SO-1")
}

#[tokio::test]
async fn test_api_key_flavor_leaves_body_alone() -> anyhow::Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();

    let http = RecordingHttpSend::default();
    let signer = Signer::new(
        Context::new().with_http_send(http.clone()),
        TaggedCredentialProvider::new(reqcraft::api_key::StaticCredentialProvider::new("k-1")),
        RequestSigner::new(),
    );

    let results = Executor::new(signer).execute(&[json!({})], &params()).await?;
    assert_eq!(results, vec![json!({"ok": true})]);

    let req = &http.take()[0];
    assert_eq!(req.headers()["authorization"], "k-1");
    assert!(req.headers().get("encrypt-head").is_none());
    let body: Value = serde_json::from_slice(req.body())?;
    assert_eq!(body, json!({"doc_no": "SO-1"}));

    Ok(())
}

#[tokio::test]
async fn test_credential_swapped_between_items() -> anyhow::Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();

    let http = RecordingHttpSend::default();
    let current = Arc::new(Mutex::new(Credential::from(
        reqcraft::api_key::Credential::new("k-1"),
    )));
    let signer = Signer::new(
        Context::new().with_http_send(http.clone()),
        SwappableProvider(current.clone()),
        RequestSigner::new(),
    );
    let executor = Executor::new(signer);

    executor.execute(&[json!({})], &params()).await?;
    *current.lock().unwrap() =
        Credential::from(reqcraft::trcloud::Credential::new("1001", "pk", "head"));
    executor.execute(&[json!({})], &params()).await?;

    let seen = http.take();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0].headers()["authorization"], "k-1");
    assert!(seen[1].headers().get("authorization").is_none());
    assert_eq!(seen[1].headers()["encrypt-head"], "head");

    let body: Value = serde_json::from_slice(seen[1].body())?;
    let envelope: Value = serde_json::from_str(body["json"].as_str().unwrap())?;
    assert_eq!(envelope["company_id"], json!("1001"));
    assert_eq!(envelope["doc_no"], json!("SO-1"));

    Ok(())
}

#[tokio::test]
async fn test_no_credential_aborts() {
    let http = RecordingHttpSend::default();
    let signer = Signer::new(
        Context::new().with_http_send(http.clone()),
        reqcraft::DefaultCredentialProvider::new(),
        RequestSigner::new(),
    );

    let err = Executor::new(signer)
        .execute(&[json!({}), json!({})], &params())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), reqcraft::ErrorKind::CredentialInvalid);
    assert!(http.take().is_empty());
}
