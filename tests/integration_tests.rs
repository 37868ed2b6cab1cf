use anyhow::Result;
use httpmock::prelude::*;
use reactome_cli::domain::catalog::{SpeciesName, TissueName};
use reactome_cli::domain::model::AnalysisRequest;
use reactome_cli::{
    AnalysisRunner, LocalStorage, OutputOptions, ReactomeClient, ReactomeError, ServiceSettings,
};
use tempfile::TempDir;

const TOKEN: &str = "MjAyNTAyMTAxMzMyMjFfOTk";
const PATHWAYS_CSV: &str = include_str!("fixtures/pathways.csv");

fn analysis_response() -> serde_json::Value {
    serde_json::json!({
        "summary": {
            "token": TOKEN,
            "projection": true,
            "interactors": false,
            "type": "OVERREPRESENTATION",
            "sampleName": "",
            "text": true,
            "includeDisease": true
        },
        "identifiersNotFound": 1,
        "pathwaysFound": 4,
        "warnings": []
    })
}

fn settings_for(server: &MockServer) -> ServiceSettings {
    ServiceSettings::default().with_reactome_url(Some(server.base_url()))
}

fn runner_for(
    server: &MockServer,
    temp_dir: &TempDir,
) -> Result<AnalysisRunner<ReactomeClient<ServiceSettings>, LocalStorage>> {
    let settings = settings_for(server);
    let reactome_url = settings.reactome_url.clone();
    let client = ReactomeClient::new(settings)?;
    Ok(AnalysisRunner::new(
        client,
        LocalStorage::new(temp_dir.path()),
        &reactome_url,
    ))
}

#[tokio::test]
async fn test_end_to_end_gene_analysis() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let server = MockServer::start();

    let submit_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/AnalysisService/identifiers/projection")
            .query_param("interactors", "false")
            .body("P02647\nP02652\n");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(analysis_response());
    });
    let pathways_mock = server.mock(|when, then| {
        when.method(GET).path(format!(
            "/AnalysisService/download/{}/pathways/TOTAL/pathways.csv",
            TOKEN
        ));
        then.status(200)
            .header("Content-Type", "text/csv;charset=UTF-8")
            .body(PATHWAYS_CSV);
    });
    let found_mock = server.mock(|when, then| {
        when.method(GET).path(format!(
            "/AnalysisService/download/{}/entities/found/TOTAL/entities_found.csv",
            TOKEN
        ));
        then.status(200).body("Submitted identifier,Found\nP02647,yes\n");
    });
    let not_found_mock = server.mock(|when, then| {
        when.method(GET).path(format!(
            "/AnalysisService/download/{}/entities/notfound/entities_not_found.csv",
            TOKEN
        ));
        then.status(200).body("Not found\nXYZ1\n");
    });
    let json_mock = server.mock(|when, then| {
        when.method(GET)
            .path(format!("/AnalysisService/download/{}/result.json", TOKEN));
        then.status(200).body("{\"pathways\":[]}");
    });

    let options = OutputOptions {
        pathways_file: Some("out/pathways.csv".into()),
        entities_found_file: Some("out/entities_found.csv".into()),
        entities_not_found_file: Some("out/entities_not_found.csv".into()),
        result_json_file: Some("out/result.json".into()),
        html_report_file: Some("out/report.html".into()),
        ..Default::default()
    };

    let runner = runner_for(&server, &temp_dir)?;
    let request = AnalysisRequest::Genes {
        identifiers: "P02647\nP02652\n".to_string(),
        project_to_human: true,
        include_interactors: false,
    };
    let outcome = runner.run(&request, &options).await?;

    submit_mock.assert();
    pathways_mock.assert();
    found_mock.assert();
    not_found_mock.assert();
    json_mock.assert();

    assert_eq!(outcome.token.as_str(), TOKEN);
    assert_eq!(outcome.pathway_count, Some(4));
    assert_eq!(outcome.written_files.len(), 5);

    let out = temp_dir.path().join("out");
    assert_eq!(std::fs::read_to_string(out.join("pathways.csv"))?, PATHWAYS_CSV);
    assert_eq!(
        std::fs::read_to_string(out.join("entities_not_found.csv"))?,
        "Not found\nXYZ1\n"
    );

    let html = std::fs::read_to_string(out.join("report.html"))?;
    assert!(html.contains(&format!(
        "{}/PathwayBrowser/#/R-HSA-8963896&DTAB=AN&ANALYSIS={}",
        server.base_url(),
        TOKEN
    )));
    assert!(html.contains("<td>3.0900e-06</td>"));
    Ok(())
}

#[tokio::test]
async fn test_species_analysis_downloads_pdf() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let server = MockServer::start();

    let submit_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/AnalysisService/species/homoSapiens/48892");
        then.status(200).json_body(analysis_response());
    });
    let pdf_mock = server.mock(|when, then| {
        when.method(GET)
            .path_contains(format!("/AnalysisService/report/{}/", TOKEN))
            .path_contains("report.pdf");
        then.status(200)
            .header("Content-Type", "application/pdf")
            .body(b"%PDF-1.7\n\xff\xfe".to_vec());
    });

    let options = OutputOptions {
        report_pdf_file: Some("report.pdf".into()),
        ..Default::default()
    };

    let runner = runner_for(&server, &temp_dir)?;
    runner
        .run(&AnalysisRequest::Species(SpeciesName::Mouse), &options)
        .await?;

    submit_mock.assert();
    pdf_mock.assert();
    assert_eq!(
        std::fs::read(temp_dir.path().join("report.pdf"))?,
        b"%PDF-1.7\n\xff\xfe".to_vec()
    );
    Ok(())
}

#[tokio::test]
async fn test_tissue_analysis_without_outputs() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let server = MockServer::start();

    let submit_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/AnalysisService/identifiers/url/projection")
            .body_contains("included=19,33");
        then.status(200).json_body(analysis_response());
    });

    let runner = runner_for(&server, &temp_dir)?;
    let request = AnalysisRequest::Tissues(vec![TissueName::SmallIntestine, TissueName::Liver]);
    let outcome = runner.run(&request, &OutputOptions::default()).await?;

    submit_mock.assert();
    assert_eq!(outcome.token.as_str(), TOKEN);
    assert!(outcome.written_files.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_submission_error_aborts_run() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST);
        then.status(500).body("Internal Server Error");
    });

    let options = OutputOptions {
        html_report_file: Some("report.html".into()),
        ..Default::default()
    };

    let runner = runner_for(&server, &temp_dir)?;
    let request = AnalysisRequest::Genes {
        identifiers: "P02647".to_string(),
        project_to_human: true,
        include_interactors: false,
    };
    let err = runner.run(&request, &options).await.unwrap_err();

    assert!(matches!(err, ReactomeError::ServiceError { status: 500, .. }));
    assert_eq!(err.exit_code(), 1);
    assert!(!temp_dir.path().join("report.html").exists());
    Ok(())
}

#[tokio::test]
async fn test_missing_token_is_reported() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET);
        then.status(200).body("{\"summary\":{}}");
    });

    let runner = runner_for(&server, &temp_dir)?;
    let err = runner
        .run(
            &AnalysisRequest::Species(SpeciesName::Human),
            &OutputOptions::default(),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, ReactomeError::TokenNotFound));
    Ok(())
}

#[tokio::test]
async fn test_expired_token_download_fails() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path_contains("/download/");
        then.status(404).body("Not Found");
    });

    let options = OutputOptions {
        result_json_file: Some("result.json".into()),
        ..Default::default()
    };

    let runner = runner_for(&server, &temp_dir)?;
    let err = runner
        .fetch_outputs(&reactome_cli::AnalysisToken::new(TOKEN), &options)
        .await
        .unwrap_err();

    assert!(err.to_string().contains("404 - Not Found"));
    assert!(err.recovery_suggestion().contains("expired"));
    Ok(())
}
