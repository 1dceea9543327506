use async_trait::async_trait;
use reqcraft_core::hash::hex_md5;
use reqcraft_core::{
    assemble, BodyMode, Context, Error, ProvideCredential, RequestDescriptor, RequestParams,
    Result, SignRequest, Signer, SigningCredential, StaticEnv,
};
use std::collections::HashMap;

// Define a custom credential type
#[derive(Clone, Debug)]
struct MyCredential {
    api_key: String,
    api_secret: String,
}

impl SigningCredential for MyCredential {
    fn is_valid(&self) -> bool {
        !self.api_key.is_empty() && !self.api_secret.is_empty()
    }
}

// Load the credential from the environment carried by the context
#[derive(Debug)]
struct MyCredentialProvider;

#[async_trait]
impl ProvideCredential for MyCredentialProvider {
    type Credential = MyCredential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let (Some(api_key), Some(api_secret)) =
            (ctx.env_var("MY_API_KEY"), ctx.env_var("MY_API_SECRET"))
        else {
            return Ok(None);
        };

        Ok(Some(MyCredential {
            api_key,
            api_secret,
        }))
    }
}

// Sign the url together with the secret
#[derive(Debug)]
struct MyRequestSigner;

#[async_trait]
impl SignRequest for MyRequestSigner {
    type Credential = MyCredential;

    async fn sign_request(
        &self,
        _ctx: &Context,
        req: &mut RequestDescriptor,
        credential: Option<&Self::Credential>,
    ) -> Result<()> {
        let cred = credential.ok_or_else(|| Error::credential_invalid("no credential provided"))?;

        let signature = hex_md5(format!("{}{}", req.url, cred.api_secret).as_bytes());
        req.header_insert("x-api-key", cred.api_key.as_str());
        req.header_insert("x-api-signature", signature);

        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = env_logger::try_init();

    // A fixed environment keeps the demo self-contained
    let ctx = Context::new().with_env(StaticEnv {
        envs: HashMap::from([
            ("MY_API_KEY".to_string(), "demo-api-key".to_string()),
            ("MY_API_SECRET".to_string(), "demo-api-secret".to_string()),
        ]),
    });
    let signer = Signer::new(ctx, MyCredentialProvider, MyRequestSigner);

    let params = RequestParams::new()
        .with_url("https://api.example.com/", "/v1/", "users")
        .with_body_mode(BodyMode::Json)
        .with_body_parameter("name", "alice");
    let mut req = assemble(&params)?;

    match signer.sign(&mut req).await {
        Ok(_) => {
            println!("Request signed successfully!");
            println!("{} {}", req.method, req.url);
            for (k, v) in &req.headers {
                println!("{k}: {v}");
            }
        }
        Err(e) => {
            eprintln!("Failed to sign request: {}", e);
        }
    }

    Ok(())
}
