use anyhow::Result;
use reactome_cli::{parse, render, ReportGenerator, TabularData};

const TOKEN: &str = "MjAyNTA2MDUxMzE5NThfNTUyMDg%3D";
const PATHWAYS_CSV: &str = include_str!("fixtures/pathways.csv");

const EXPECTED_HEADERS: [&str; 15] = [
    "Pathway identifier",
    "Pathway name",
    "#Entities found",
    "#Entities total",
    "Entities ratio",
    "Entities pValue",
    "Entities FDR",
    "#Reactions found",
    "#Reactions total",
    "Reactions ratio",
    "Species identifier",
    "Species name",
    "Submitted entities found",
    "Mapped entities",
    "Found reaction identifiers",
];

fn body_rows(html: &str) -> Vec<&str> {
    let tbody_start = html.find("<tbody>").unwrap() + "<tbody>".len();
    let tbody_end = html.find("</tbody>").unwrap();
    html[tbody_start..tbody_end]
        .split("</tr>")
        .filter(|row| !row.is_empty())
        .collect()
}

/// 測試從 pathways.csv 解析欄位與資料列
#[test]
fn test_parse_pathways_csv() -> Result<()> {
    let data = parse(PATHWAYS_CSV)?;

    assert_eq!(data.headers, EXPECTED_HEADERS);
    assert_eq!(data.rows.len(), 4);
    for row in &data.rows {
        assert_eq!(row.len(), EXPECTED_HEADERS.len());
    }

    let first_row = &data.rows[0];
    assert_eq!(first_row["Pathway identifier"], "R-HSA-8963896");
    assert_eq!(first_row["Pathway name"], "HDL assembly");
    assert_eq!(first_row["#Entities total"], "18");
    assert_eq!(
        data.rows[3]["Found reaction identifiers"],
        "R-HSA-381033, R-HSA-381038"
    );
    Ok(())
}

#[test]
fn test_report_has_one_row_per_pathway() -> Result<()> {
    let data = parse(PATHWAYS_CSV)?;
    let html = render(&data, TOKEN, "https://reactome.org");

    let rows = body_rows(&html);
    assert_eq!(rows.len(), data.rows.len());
    for row in rows {
        assert!(row.starts_with("<tr>"));
        // 12 visible columns plus the diagram column
        assert_eq!(row.matches("<td>").count(), 13);
    }
    Ok(())
}

#[test]
fn test_report_header_columns() -> Result<()> {
    let data = parse(PATHWAYS_CSV)?;
    let html = render(&data, TOKEN, "https://reactome.org");

    // 15 headers, 3 skipped, 1 diagram column added
    assert_eq!(html.matches("<th>").count(), 13);
    assert!(html.contains("<th>Pathway name</th><th>Pathway Diagram</th><th>#Entities found</th>"));
    assert!(html.contains("<th>Species name</th></tr></thead>"));
    for skipped in ["Submitted entities found", "Mapped entities", "Found reaction identifiers"] {
        assert!(!html.contains(&format!("<th>{}</th>", skipped)));
    }
    Ok(())
}

#[test]
fn test_report_links_and_numbers() -> Result<()> {
    let data = parse(PATHWAYS_CSV)?;
    let html = render(&data, TOKEN, "https://reactome.org");

    assert!(html.contains(&format!(
        "<td><a href=\"https://reactome.org/PathwayBrowser/#/R-HSA-8963896&DTAB=AN&ANALYSIS={}\" target=\"_blank\">HDL assembly</a></td>",
        TOKEN
    )));
    assert!(html.contains(&format!(
        "<td><a href=\"https://reactome.org/ContentService/exporter/diagram/R-HSA-8963896.png?diagramProfile=Modern&token={}&analysisProfile=Standard&quality=10\" target=\"_blank\"><img src=\"https://reactome.org/ContentService/exporter/diagram/R-HSA-8963896.png?diagramProfile=Modern&token={}&analysisProfile=Standard&quality=5\" alt=\"Pathway Diagram\" style=\"max-width: 100px; max-height: 100px;\"></a></td>",
        TOKEN, TOKEN
    )));

    // Entities ratio, pValue, FDR of the first pathway
    assert!(html.contains("<td>1.1000e-03</td><td>3.0900e-06</td><td>2.7377e-03</td>"));
    // Reactions ratio, then raw species columns
    assert!(html.contains("<td>5.5000e-04</td><td>9606</td><td>Homo sapiens</td></tr>"));
    assert!(!html.contains("P02647;P02652"));
    Ok(())
}

#[test]
fn test_report_is_reproducible() -> Result<()> {
    let data = parse(PATHWAYS_CSV)?;
    let generator = ReportGenerator::new("https://reactome.org");

    assert_eq!(generator.render(&data, TOKEN), generator.render(&data, TOKEN));
    assert_eq!(
        generator.render(&data, TOKEN),
        render(&data, TOKEN, "https://reactome.org")
    );
    Ok(())
}

#[test]
fn test_invalid_numbers_render_as_zero() -> Result<()> {
    let data = parse("\"Pathway name\",\"Entities pValue\"\n\"X\",\"not-a-number\"\n")?;
    let html = render(&data, "TOK", "https://reactome.org");

    assert!(html.contains("<td>0.0000e+00</td>"));
    Ok(())
}

#[test]
fn test_empty_csv_renders_empty_table() -> Result<()> {
    let data = parse("")?;
    assert_eq!(data, TabularData::default());

    let html = render(&data, "TOK", "https://reactome.org");
    assert!(html.contains("<h1>Pathways</h1>"));
    assert!(body_rows(&html).is_empty());
    Ok(())
}
