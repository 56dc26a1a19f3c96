//! HTML template constants for the `HtmlReportAssembler`.

/// Document head and opening of the container. `{title}` is substituted.
pub const HTML_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
        :root {
            --color-bg: #f8fafc;
            --color-card: #ffffff;
            --color-border: #e2e8f0;
            --color-text: #1e293b;
            --color-text-muted: #64748b;
            --color-failed: #ef4444;
        }
        body.dark {
            --color-bg: #222222;
            --color-card: #2c2c2c;
            --color-border: #444444;
            --color-text: #eeeeee;
            --color-text-muted: #aaaaaa;
        }
        * { box-sizing: border-box; margin: 0; padding: 0; }
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;
            background: var(--color-bg);
            color: var(--color-text);
            line-height: 1.6;
            padding: 2rem;
        }
        .container { max-width: 1200px; margin: 0 auto; }
        h1 { font-size: 1.875rem; font-weight: 700; margin-bottom: 1.5rem; }
        h2 { font-size: 1.25rem; font-weight: 600; margin: 1.5rem 0 1rem; }
        h3 { font-size: 1rem; font-weight: 600; margin: 1rem 0 0.5rem; }
        .summary-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(150px, 1fr)); gap: 1rem; margin-bottom: 2rem; }
        .summary-card { background: var(--color-card); border-radius: 0.5rem; padding: 1.25rem; border: 1px solid var(--color-border); text-align: center; }
        .summary-card .value { font-size: 2rem; font-weight: 700; display: block; }
        .summary-card .label { font-size: 0.875rem; color: var(--color-text-muted); margin-top: 0.25rem; }
        .summary-card.failed .value { color: var(--color-failed); }
        .table-container { overflow-x: auto; }
        table { width: 100%; border-collapse: collapse; background: var(--color-card); border-radius: 0.5rem; overflow: hidden; border: 1px solid var(--color-border); margin-bottom: 1rem; }
        th, td { padding: 0.5rem 1rem; text-align: left; border-bottom: 1px solid var(--color-border); }
        th { font-weight: 600; font-size: 0.875rem; color: var(--color-text-muted); text-transform: uppercase; letter-spacing: 0.05em; }
        td { font-size: 0.875rem; }
        td.number { text-align: right; font-variant-numeric: tabular-nums; }
        tr:last-child td { border-bottom: none; }
        .chart-container { background: var(--color-card); border-radius: 0.5rem; padding: 1.25rem; border: 1px solid var(--color-border); margin-bottom: 1rem; }
        .chart-container img { width: 100%; height: auto; }
        .failures li { font-size: 0.875rem; margin-left: 1.25rem; }
        .failures code { color: var(--color-failed); }
        .footer { margin-top: 2rem; padding-top: 1rem; border-top: 1px solid var(--color-border); font-size: 0.75rem; color: var(--color-text-muted); text-align: center; }
    </style>
</head>
"#;

pub const HTML_FOOTER: &str = r#"        <div class="footer">
            Generated by <strong>perf-charts</strong>
        </div>
    </div>
</body>
</html>
"#;
