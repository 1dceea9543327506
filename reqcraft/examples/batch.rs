//! Run a small batch with whatever credential the environment provides.
//!
//! ```shell
//! REQCRAFT_API_KEY=... cargo run --example batch -- https://httpbin.org/anything
//! ```

use reqcraft::{BodyMode, RequestParams, Result};
use serde_json::{json, Value};

#[tokio::main]
async fn main() -> Result<()> {
    let _ = env_logger::try_init();

    let url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "https://httpbin.org/anything".to_string());

    let items = vec![json!({"id": 1}), json!({"id": 2}), json!({"id": 3})];
    let params = |_: usize, item: &Value| -> Result<RequestParams> {
        Ok(RequestParams::new()
            .with_curl(format!("curl -X POST {url}"))
            .with_body_mode(BodyMode::Json)
            .with_body_parameter("id", item["id"].to_string()))
    };

    let results = reqcraft::default_executor(true)
        .execute(&items, &params)
        .await?;
    for (i, result) in results.iter().enumerate() {
        println!("#{i}: {result}");
    }

    Ok(())
}
