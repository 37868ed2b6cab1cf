/// Builds the browser and diagram links of a pathway for one analysis.
///
/// Identifiers and tokens are inserted verbatim; Reactome already hands them
/// out URL-safe.
#[derive(Debug, Clone)]
pub struct LinkBuilder {
    reactome_url: String,
}

impl LinkBuilder {
    pub fn new(reactome_url: impl Into<String>) -> Self {
        Self {
            reactome_url: reactome_url.into(),
        }
    }

    pub fn pathway_browser_link(&self, pathway_id: &str, token: &str) -> String {
        format!(
            "{}/PathwayBrowser/#/{}&DTAB=AN&ANALYSIS={}",
            self.reactome_url, pathway_id, token
        )
    }

    pub fn pathway_diagram_url(&self, pathway_id: &str, token: &str) -> String {
        format!(
            "{}/exporter/diagram/{}.png?diagramProfile=Modern&token={}&analysisProfile=Standard",
            self.content_service_url(),
            pathway_id,
            token
        )
    }

    /// Diagram image at the given export quality (1 to 10).
    pub fn pathway_diagram_url_with_quality(
        &self,
        pathway_id: &str,
        token: &str,
        quality: u8,
    ) -> String {
        format!(
            "{}&quality={}",
            self.pathway_diagram_url(pathway_id, token),
            quality
        )
    }

    fn content_service_url(&self) -> String {
        format!("{}/ContentService", self.reactome_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pathway_browser_link() {
        let links = LinkBuilder::new("https://reactome.org");
        assert_eq!(
            links.pathway_browser_link("R-HSA-8963896", "TOK"),
            "https://reactome.org/PathwayBrowser/#/R-HSA-8963896&DTAB=AN&ANALYSIS=TOK"
        );
    }

    #[test]
    fn test_pathway_diagram_urls() {
        let links = LinkBuilder::new("https://reactome.org");
        assert_eq!(
            links.pathway_diagram_url("R-HSA-8963896", "TOK"),
            "https://reactome.org/ContentService/exporter/diagram/R-HSA-8963896.png?diagramProfile=Modern&token=TOK&analysisProfile=Standard"
        );
        assert!(links
            .pathway_diagram_url_with_quality("R-HSA-8963896", "TOK", 5)
            .ends_with("&analysisProfile=Standard&quality=5"));
    }

    #[test]
    fn test_empty_pathway_id_still_builds_url() {
        let links = LinkBuilder::new("http://localhost");
        assert_eq!(
            links.pathway_browser_link("", "TOK"),
            "http://localhost/PathwayBrowser/#/&DTAB=AN&ANALYSIS=TOK"
        );
    }
}
