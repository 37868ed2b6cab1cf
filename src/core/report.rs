use crate::core::fields::{classify, FieldKind, PATHWAY_ID_FIELD};
use crate::core::links::LinkBuilder;
use crate::domain::model::TabularData;

const REPORT_TITLE: &str = "Reactome Pathway Links";
const DIAGRAM_COLUMN: &str = "Pathway Diagram";
const THUMBNAIL_QUALITY: u8 = 5;
const FULL_QUALITY: u8 = 10;

const REPORT_STYLE: &str = concat!(
    "body { font-family: Arial, sans-serif; margin: 20px; }",
    "h1 { color: #333; }",
    "table { border-collapse: collapse; width: 100%; margin-top: 20px; }",
    "th, td { border: 1px solid #ddd; padding: 8px; text-align: left; }",
    "th { background-color: #f4f4f4; color: #333; }",
    "tr:nth-child(even) { background-color: #f9f9f9; }",
    "tr:hover { background-color: #f1f1f1; }",
    "a { color: #007bff; text-decoration: none; }",
    "a:hover { text-decoration: underline; }",
);

/// Renders a pathways table as a standalone HTML page.
#[derive(Debug, Clone)]
pub struct ReportGenerator {
    links: LinkBuilder,
}

impl ReportGenerator {
    pub fn new(reactome_url: impl Into<String>) -> Self {
        Self {
            links: LinkBuilder::new(reactome_url),
        }
    }

    pub fn render(&self, data: &TabularData, token: &str) -> String {
        let mut html = String::with_capacity(4096 + data.rows.len() * 1024);

        html.push_str("<html>");
        html.push_str("<head>");
        html.push_str(&format!("<title>{}</title>", REPORT_TITLE));
        html.push_str(&format!("<style>{}</style>", REPORT_STYLE));
        html.push_str("</head>");

        html.push_str("<body>");
        html.push_str("<h1>Pathways</h1>");
        html.push_str("<table border=\"1\">");
        html.push_str("<thead><tr>");
        for header in &data.headers {
            match classify(header) {
                FieldKind::PathwayName => {
                    html.push_str(&format!("<th>{}</th>", header));
                    html.push_str(&format!("<th>{}</th>", DIAGRAM_COLUMN));
                }
                FieldKind::Skipped => {}
                FieldKind::Numeric | FieldKind::Plain => {
                    html.push_str(&format!("<th>{}</th>", header));
                }
            }
        }
        html.push_str("</tr></thead>");

        html.push_str("<tbody>");
        for row in &data.rows {
            let pathway = row.get(PATHWAY_ID_FIELD).map(String::as_str).unwrap_or("");
            let small_image_url =
                self.links
                    .pathway_diagram_url_with_quality(pathway, token, THUMBNAIL_QUALITY);
            let large_image_url = self
                .links
                .pathway_diagram_url_with_quality(pathway, token, FULL_QUALITY);

            html.push_str("<tr>");
            for header in &data.headers {
                let value = row.get(header).map(String::as_str).unwrap_or("");

                match classify(header) {
                    FieldKind::PathwayName => {
                        html.push_str(&format!(
                            "<td><a href=\"{}\" target=\"_blank\">{}</a></td>",
                            self.links.pathway_browser_link(pathway, token),
                            value
                        ));
                        html.push_str(&format!(
                            "<td><a href=\"{}\" target=\"_blank\"><img src=\"{}\" alt=\"{}\" style=\"max-width: 100px; max-height: 100px;\"></a></td>",
                            large_image_url, small_image_url, DIAGRAM_COLUMN
                        ));
                    }
                    FieldKind::Numeric => {
                        html.push_str(&format!("<td>{}</td>", format_scientific(value)));
                    }
                    FieldKind::Skipped => {}
                    FieldKind::Plain => {
                        html.push_str(&format!("<td>{}</td>", value));
                    }
                }
            }
            html.push_str("</tr>");
        }
        html.push_str("</tbody>");

        html.push_str("</table>");
        html.push_str("</body>");
        html.push_str("</html>");

        tracing::debug!(
            "Rendered HTML report with {} pathways ({} bytes)",
            data.rows.len(),
            html.len()
        );

        html
    }
}

/// Render `data` for the analysis `token` against the Reactome server at `reactome_url`.
pub fn render(data: &TabularData, token: &str, reactome_url: &str) -> String {
    ReportGenerator::new(reactome_url).render(data, token)
}

/// Scientific notation with four decimals and a signed two-digit exponent,
/// e.g. `3.0900e-06`. Values that are not numbers render as zero.
///
/// Rounding is half-up on the shortest decimal form of the value, so
/// `0.0273775` gives `2.7378e-02`.
pub fn format_scientific(value: &str) -> String {
    let number = parse_number(value).unwrap_or(0.0);

    if number.is_nan() {
        return "NaN".to_string();
    }
    if number.is_infinite() {
        return if number > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    // shortest round-trip form, e.g. "-2.73775e-2"
    let shortest = format!("{:e}", number);
    let (mantissa, exponent) = shortest
        .split_once('e')
        .unwrap_or((shortest.as_str(), "0"));
    let mut exponent: i32 = exponent.parse().unwrap_or(0);
    let (negative, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, mantissa),
    };

    let mut digits: Vec<u8> = mantissa
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect();

    const SIGNIFICANT: usize = 5;
    if digits.len() > SIGNIFICANT {
        let round_up = digits[SIGNIFICANT] >= 5;
        digits.truncate(SIGNIFICANT);
        if round_up && increment(&mut digits) {
            digits.insert(0, 1);
            digits.truncate(SIGNIFICANT);
            exponent += 1;
        }
    }
    digits.resize(SIGNIFICANT, 0);

    let fraction: String = digits[1..].iter().map(|d| char::from(b'0' + d)).collect();
    format!(
        "{}{}.{}e{}{:02}",
        if negative { "-" } else { "" },
        digits[0],
        fraction,
        if exponent < 0 { '-' } else { '+' },
        exponent.abs()
    )
}

/// Adds one to the last digit; true when the carry runs off the front.
fn increment(digits: &mut [u8]) -> bool {
    for digit in digits.iter_mut().rev() {
        if *digit == 9 {
            *digit = 0;
        } else {
            *digit += 1;
            return false;
        }
    }
    true
}

/// Decimal number with optional surrounding control characters and spaces,
/// an optional `d`/`f` suffix, or the words `NaN` and `Infinity`.
fn parse_number(value: &str) -> Option<f64> {
    let trimmed = value.trim_matches(|c: char| c <= ' ');
    let (sign, body) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1.0, &trimmed[1..]),
        Some(b'+') => (1.0, &trimmed[1..]),
        _ => (1.0, trimmed),
    };

    match body {
        "NaN" => return Some(f64::NAN),
        "Infinity" => return Some(sign * f64::INFINITY),
        _ => {}
    }

    let body = body.strip_suffix(['d', 'D', 'f', 'F']).unwrap_or(body);
    let decimal = !body.is_empty()
        && !body.starts_with(['+', '-'])
        && body
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'));
    if !decimal {
        return None;
    }

    body.parse::<f64>().ok().map(|number| sign * number)
}
