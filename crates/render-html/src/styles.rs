//! The print document's embedded stylesheet.
//!
//! Two-column front page, single-column detail pages. The `@media
//! print` rules carry the pagination contract: the front page breaks
//! after itself, and individual cards never split across a page
//! boundary. `white-space: pre-line` on the summary keeps blank-line
//! paragraphs visible.

pub(crate) const STYLES: &str = r#"
    :root {
      --ink: #0f172a;
      --text: #334155;
      --muted: #64748b;
      --line: #e2e8f0;
      --surface: #ffffff;
      --sidebar: #f8fafc;
      --brand: #2563eb;
      --brand-ink: #1e40af;

      --radius: 12px;

      --font-sans: Inter, -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Arial, "Noto Sans", "Liberation Sans", sans-serif;
      --font-display: "Space Grotesk", Inter, -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Arial, sans-serif;
    }

    * { box-sizing: border-box; }
    html, body { height: 100%; }
    body {
      margin: 0;
      background: var(--surface);
      color: var(--text);
      font-family: var(--font-sans);
      -webkit-font-smoothing: antialiased;
      text-rendering: optimizeLegibility;
      line-height: 1.45;
    }

    a { color: inherit; text-decoration: none; }
    .meta-value a { color: var(--brand); text-decoration: underline; }

    .page {
      max-width: 960px;
      margin: 0 auto;
      padding: 32px 18px;
    }

    .cv {
      border: 1px solid var(--line);
      border-radius: var(--radius);
      overflow: hidden;
      background: var(--surface);
    }

    .cv--first {
      display: grid;
      grid-template-columns: 320px 1fr;
    }

    .cv--rest {
      margin-top: 16px;
    }

    .sidebar {
      background: var(--sidebar);
      padding: 26px 20px;
      border-right: 1px solid var(--line);
    }

    .avatar-wrap {
      display: flex;
      justify-content: center;
      padding-top: 4px;
    }

    .avatar {
      width: 140px;
      height: 140px;
      border-radius: 8px;
      object-fit: cover;
      border: 1px solid var(--line);
      background: #fff;
    }

    .content {
      padding: 26px 24px;
      min-width: 0;
    }

    .content--full {
      padding: 26px 24px;
    }

    .header {
      display: grid;
      grid-template-columns: 1fr auto;
      gap: 18px;
      align-items: start;
      padding-bottom: 18px;
      border-bottom: 1px solid var(--line);
      margin-bottom: 18px;
    }

    .name {
      font-family: var(--font-display);
      font-size: 30px;
      line-height: 1.1;
      letter-spacing: -0.02em;
      color: var(--ink);
      margin: 0;
    }

    .role {
      margin-top: 8px;
      font-size: 13px;
      color: var(--muted);
      font-weight: 600;
    }

    .top-skills {
      margin-top: 12px;
      display: flex;
      flex-wrap: wrap;
      gap: 6px;
    }

    .chip {
      display: inline-flex;
      align-items: center;
      padding: 4px 10px;
      border-radius: 999px;
      border: 1px solid rgba(37, 99, 235, 0.22);
      background: rgba(37, 99, 235, 0.06);
      color: var(--brand-ink);
      font-size: 11px;
      font-weight: 600;
      white-space: nowrap;
    }

    .block + .block { margin-top: 18px; }

    .section-title {
      font-family: var(--font-display);
      font-size: 12px;
      letter-spacing: 0.12em;
      text-transform: uppercase;
      color: var(--ink);
      margin: 0 0 10px;
    }

    .divider {
      height: 1px;
      background: var(--line);
      margin: 16px 0;
    }

    .meta-list {
      display: grid;
      gap: 10px;
      font-size: 12px;
      color: var(--text);
    }

    .meta-item {
      display: grid;
      gap: 2px;
    }

    .meta-label {
      font-size: 11px;
      color: var(--muted);
      font-weight: 600;
      letter-spacing: 0.02em;
    }

    .meta-value {
      font-weight: 600;
      color: var(--ink);
      overflow-wrap: anywhere;
    }

    .summary {
      font-size: 12.5px;
      color: var(--text);
      white-space: pre-line;
    }

    .tag-list {
      display: flex;
      flex-wrap: wrap;
      gap: 6px;
    }

    .tag {
      font-size: 11px;
      font-weight: 600;
      color: var(--text);
      background: rgba(15, 23, 42, 0.04);
      border: 1px solid rgba(15, 23, 42, 0.08);
      padding: 4px 8px;
      border-radius: 999px;
      white-space: nowrap;
    }

    .edu-list {
      display: grid;
      gap: 10px;
    }

    .edu-item {
      display: grid;
      gap: 4px;
      padding: 10px 10px;
      border-radius: 10px;
      border: 1px solid rgba(15, 23, 42, 0.08);
      background: rgba(15, 23, 42, 0.03);
    }

    .edu-title {
      font-size: 12px;
      font-weight: 800;
      color: var(--ink);
      line-height: 1.2;
    }

    .edu-issuer {
      font-size: 11px;
      font-weight: 700;
      color: var(--text);
      overflow-wrap: anywhere;
    }

    .edu-meta {
      font-size: 11px;
      font-weight: 700;
      color: var(--muted);
    }

    .rec-group + .rec-group {
      margin-top: 12px;
    }

    .rec-group-title {
      font-size: 11px;
      font-weight: 800;
      letter-spacing: 0.03em;
      color: var(--ink);
      margin: 0 0 8px;
    }

    .rec-card {
      border-radius: 10px;
      padding: 10px 10px;
      border: 1px solid rgba(37, 99, 235, 0.22);
      background: rgba(37, 99, 235, 0.06);
    }

    .rec-card + .rec-card {
      margin-top: 10px;
    }

    .rec-name {
      font-size: 12px;
      font-weight: 800;
      color: var(--ink);
      margin: 0 0 6px;
    }

    .rec-line {
      font-size: 11px;
      font-weight: 600;
      color: var(--text);
      line-height: 1.35;
      overflow-wrap: anywhere;
    }

    .content-section { margin-top: 18px; }

    .item {
      padding: 12px 12px;
      border-radius: 12px;
      border: 1px solid rgba(226, 232, 240, 0.9);
      background: rgba(248, 250, 252, 0.55);
    }

    .item + .item { margin-top: 10px; }

    .item-head {
      display: grid;
      gap: 2px;
      margin-bottom: 8px;
    }

    .item-title {
      font-size: 13px;
      font-weight: 700;
      color: var(--ink);
    }

    .item-subtitle {
      font-size: 12px;
      color: var(--text);
      font-weight: 600;
    }

    .item-meta {
      font-size: 11px;
      color: var(--muted);
      font-weight: 600;
    }

    ul.bullets {
      margin: 0;
      padding-left: 16px;
      display: grid;
      gap: 6px;
      color: var(--text);
      font-size: 12px;
    }

    .subtopic {
      margin-top: 10px;
      padding-top: 10px;
      border-top: 1px dashed rgba(148, 163, 184, 0.5);
    }

    .subtopic-title {
      font-size: 11px;
      font-weight: 800;
      color: var(--ink);
      letter-spacing: 0.02em;
      margin: 0 0 8px;
    }

    .project-title { font-size: 13px; font-weight: 800; color: var(--ink); }
    .project-summary { font-size: 12px; color: var(--text); margin-top: 4px; }

    .stack {
      margin-top: 8px;
      display: flex;
      flex-wrap: wrap;
      gap: 6px;
    }

    .stack-tag {
      font-size: 10.5px;
      font-weight: 700;
      color: var(--brand-ink);
      background: rgba(37, 99, 235, 0.08);
      border: 1px solid rgba(37, 99, 235, 0.18);
      padding: 3px 8px;
      border-radius: 999px;
      white-space: nowrap;
    }

    @media print {
      @page {
        size: A4;
        margin: 14mm;
      }

      * {
        -webkit-print-color-adjust: exact;
        print-color-adjust: exact;
      }

      body {
        background: #ffffff;
      }

      .page {
        padding: 0;
        max-width: none;
      }

      .cv {
        border: 0;
        border-radius: 0;
      }

      .cv--first {
        break-after: page;
      }

      .cv--rest {
        margin-top: 0;
      }

      .cv--first .summary {
        display: -webkit-box;
        -webkit-box-orient: vertical;
        -webkit-line-clamp: 8;
        overflow: hidden;
      }

      .item,
      .block,
      .content-section,
      .header {
        break-inside: avoid;
      }

      .rec-group,
      .rec-card {
        break-inside: avoid;
      }

      .edu-item {
        break-inside: avoid;
      }

      .item {
        background: rgba(248, 250, 252, 0.75);
      }

      .section-title {
        break-after: avoid;
      }

      ul.bullets {
        orphans: 3;
        widows: 3;
      }
    }
"#;
