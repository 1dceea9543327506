use anyhow::Result;
use reqcraft_core::{normalize, Context, RequestDescriptor};
use reqcraft_http_send_reqwest::ReqwestHttpSend;
use reqwest::Client;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    let _ = env_logger::try_init();

    // Timeouts and pooling belong to the client, not to reqcraft
    let client = Client::builder()
        .timeout(Duration::from_secs(30))
        .pool_max_idle_per_host(10)
        .user_agent("reqcraft-example/1.0")
        .build()?;

    let ctx = Context::new().with_http_send(ReqwestHttpSend::new(client));

    let mut req = RequestDescriptor::new(http::Method::GET, "https://httpbin.org/get");
    req.header_insert("X-Test-Header", "reqcraft-example");

    match ctx.send(req).await {
        Ok(resp) => {
            println!("Response status: {}", resp.status());
            let value = normalize(resp.into_body());
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        Err(e) => {
            eprintln!("Request failed: {e}");
        }
    }

    Ok(())
}
