use file_relay_api::envelope::ResponseEnvelope;

const URL: &str = "http://localhost:3000";

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let hc = httpc_test::new_client(URL)?;

    let response = hc.do_get("/").await?;
    response.print().await?;
    let envelope: ResponseEnvelope = serde_json::from_value(response.json_body()?)?;
    if let ResponseEnvelope::Success { data } = envelope {
        println!("OUTPUT: {}", data.output);
    }

    Ok(())
}
