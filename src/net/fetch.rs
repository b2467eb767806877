use crate::net::{Request, Response};

// Sends a request and returns the fully buffered response
pub async fn fetch(client: &reqwest::Client, request: Request) -> Result<Response, reqwest::Error> {
    let mut builder = client
        .request(request.method, request.url)
        .headers(request.headers);
    if let Some(fields) = request.form {
        builder = builder.form(&fields);
    }

    let res = builder.send().await?;

    // Fetch results
    let final_url = res.url().clone();
    let status = res.status().as_u16();
    let status_text = res.status().canonical_reason().unwrap_or("Unknown").to_string();
    let headers = res.headers().clone();

    // Fetch body. We don't do streaming
    let body = res.bytes().await?.to_vec();

    Ok(Response {
        url: final_url,
        status,
        status_text,
        headers,
        body,
    })
}
