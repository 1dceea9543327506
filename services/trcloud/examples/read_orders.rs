//! Read sales orders from a trcloud instance.
//!
//! ```shell
//! TRCLOUD_BASE_URL=https://demo.trcloud.co \
//! TRCLOUD_COMPANY_ID=1001 TRCLOUD_PASSKEY=... TRCLOUD_ENCRYPT_HEAD=... \
//! cargo run --example read_orders -- SO-0001 SO-0002
//! ```

use reqcraft_core::{Context, Executor, OsEnv, RequestParams, Result, Signer};
use reqcraft_http_send_reqwest::ReqwestHttpSend;
use reqcraft_trcloud::{Config, DefaultCredentialProvider, RequestSigner};
use serde_json::{json, Value};

#[tokio::main]
async fn main() -> Result<()> {
    let _ = env_logger::builder().is_test(false).try_init();

    let ctx = Context::new()
        .with_http_send(ReqwestHttpSend::default())
        .with_env(OsEnv);

    let config = Config::new().from_env(&ctx);
    let params = config.request_params()?;

    let items: Vec<Value> = std::env::args()
        .skip(1)
        .map(|doc_no| json!({ "doc_no": doc_no }))
        .collect();

    let signer = Signer::new(ctx, DefaultCredentialProvider::new(), RequestSigner::new());
    let executor = Executor::new(signer).with_continue_on_fail(true);

    let results = executor
        .execute(&items, &|_: usize, item: &Value| -> Result<RequestParams> {
            Ok(params.clone().with_body_parameter(
                "doc_no",
                item["doc_no"].as_str().unwrap_or_default(),
            ))
        })
        .await?;

    for (item, result) in items.iter().zip(results) {
        println!("{}: {result}", item["doc_no"]);
    }

    Ok(())
}
