use axum::response::Html;

/// Index/landing page handler
/// Returns a simple HTML page with the available endpoints
#[tracing::instrument]
pub async fn index() -> Html<String> {
    let html = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Axum on Lambda</title>
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            min-height: 100vh;
            display: flex;
            align-items: center;
            justify-content: center;
            margin: 0;
            padding: 20px;
        }
        .container {
            background: white;
            border-radius: 16px;
            box-shadow: 0 20px 60px rgba(0, 0, 0, 0.3);
            max-width: 560px;
            width: 100%;
            padding: 48px;
        }
        h1 {
            color: #2d3748;
            font-size: 28px;
            margin: 0 0 24px;
        }
        .endpoint-list {
            list-style: none;
            padding: 0;
        }
        .endpoint-list li {
            background: #f7fafc;
            padding: 12px 16px;
            margin-bottom: 8px;
            border-radius: 8px;
            border-left: 4px solid #667eea;
        }
        .endpoint-list code {
            color: #667eea;
            font-family: 'Courier New', monospace;
            font-size: 14px;
        }
        .footer {
            margin-top: 24px;
            color: #a0aec0;
            font-size: 14px;
        }
    </style>
</head>
<body>
    <div class="container">
        <h1>Welcome to Axum on Lambda!</h1>
        <ul class="endpoint-list">
            <li><code>GET /api/hello</code></li>
            <li><code>GET /health</code></li>
        </ul>
        <div class="footer">
            <p>Built with Rust 🦀 | Powered by Tokio and Axum</p>
        </div>
    </div>
</body>
</html>"#;

    Html(html.to_string())
}
