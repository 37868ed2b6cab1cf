use crate::utils::error::ReactomeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpeciesName {
    Cow,
    Worm,
    Dog,
    Zebrafish,
    Amoeba,
    Fly,
    Chicken,
    Mouse,
    Tuberculosis,
    Malaria,
    Rat,
    BakersYeast,
    FissionYeast,
    Pig,
    Frog,
    Human,
}

impl SpeciesName {
    pub const ALL: [SpeciesName; 16] = [
        SpeciesName::Cow,
        SpeciesName::Worm,
        SpeciesName::Dog,
        SpeciesName::Zebrafish,
        SpeciesName::Amoeba,
        SpeciesName::Fly,
        SpeciesName::Chicken,
        SpeciesName::Mouse,
        SpeciesName::Tuberculosis,
        SpeciesName::Malaria,
        SpeciesName::Rat,
        SpeciesName::BakersYeast,
        SpeciesName::FissionYeast,
        SpeciesName::Pig,
        SpeciesName::Frog,
        SpeciesName::Human,
    ];

    pub fn scientific_name(self) -> &'static str {
        self.entry().0
    }

    pub fn short_name(self) -> &'static str {
        self.entry().1
    }

    /// Reactome database id of the species.
    pub fn db_id(self) -> u32 {
        self.entry().2
    }

    fn entry(self) -> (&'static str, &'static str, u32) {
        match self {
            SpeciesName::Cow => ("Bos taurus", "cow", 48898),
            SpeciesName::Worm => ("Caenorhabditis elegans", "worm", 68320),
            SpeciesName::Dog => ("Canis familiaris", "dog", 49646),
            SpeciesName::Zebrafish => ("Danio rerio", "zebrafish", 68323),
            SpeciesName::Amoeba => ("Dictyostelium discoideum", "amoeba", 170941),
            SpeciesName::Fly => ("Drosophila melanogaster", "fly", 56210),
            SpeciesName::Chicken => ("Gallus gallus", "chicken", 49591),
            SpeciesName::Mouse => ("Mus musculus", "mouse", 48892),
            SpeciesName::Tuberculosis => ("Mycobacterium tuberculosis", "tuberculosis", 176806),
            SpeciesName::Malaria => ("Plasmodium falciparum", "malaria", 170928),
            SpeciesName::Rat => ("Rattus norvegicus", "rat", 48895),
            SpeciesName::BakersYeast => ("Saccharomyces cerevisiae", "yeast", 68322),
            SpeciesName::FissionYeast => ("Schizosaccharomyces pombe", "fission_yeast", 68324),
            SpeciesName::Pig => ("Sus scrofa", "pig", 49633),
            SpeciesName::Frog => ("Xenopus tropicalis", "frog", 205621),
            SpeciesName::Human => ("Homo sapiens", "human", 48887),
        }
    }

    /// Case-insensitive lookup by scientific or short name.
    pub fn lookup(name: &str) -> Option<SpeciesName> {
        Self::ALL.into_iter().find(|species| {
            species.scientific_name().eq_ignore_ascii_case(name)
                || species.short_name().eq_ignore_ascii_case(name)
        })
    }

    /// Scientific name as it appears in a URL path segment.
    pub fn url_segment(self) -> String {
        self.scientific_name().replace(' ', "%20")
    }
}

impl FromStr for SpeciesName {
    type Err = ReactomeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SpeciesName::lookup(s).ok_or_else(|| ReactomeError::UnknownSpecies(s.to_string()))
    }
}

impl fmt::Display for SpeciesName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.scientific_name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TissueName {
    AdrenalGland,
    BoneMarrow,
    Breast,
    Bronchus,
    Cerebellum,
    CerebralCortex,
    CervixUterine,
    Colon,
    Duodenum,
    Epididymis,
    Esophagus,
    FallopianTube,
    GallBladder,
    HeartMuscle,
    HippocampalFormation,
    Kidney,
    Liver,
    Lung,
    LymphNode,
    Nasopharynx,
    OralMucosa,
    Ovary,
    Pancreas,
    ParathyroidGland,
    Placenta,
    ProstateGland,
    Rectum,
    SalivaSecretingGland,
    SeminalVesicle,
    SkeletalMuscleTissue,
    SmallIntestine,
    SmoothMuscleTissue,
    Spleen,
    TelencephalicVentricle,
    Testis,
    ThyroidGland,
    Tonsil,
    UrinaryBladder,
    Vagina,
    VermiformAppendix,
}

impl TissueName {
    pub const ALL: [TissueName; 40] = [
        TissueName::AdrenalGland,
        TissueName::BoneMarrow,
        TissueName::Breast,
        TissueName::Bronchus,
        TissueName::Cerebellum,
        TissueName::CerebralCortex,
        TissueName::CervixUterine,
        TissueName::Colon,
        TissueName::Duodenum,
        TissueName::Epididymis,
        TissueName::Esophagus,
        TissueName::FallopianTube,
        TissueName::GallBladder,
        TissueName::HeartMuscle,
        TissueName::HippocampalFormation,
        TissueName::Kidney,
        TissueName::Liver,
        TissueName::Lung,
        TissueName::LymphNode,
        TissueName::Nasopharynx,
        TissueName::OralMucosa,
        TissueName::Ovary,
        TissueName::Pancreas,
        TissueName::ParathyroidGland,
        TissueName::Placenta,
        TissueName::ProstateGland,
        TissueName::Rectum,
        TissueName::SalivaSecretingGland,
        TissueName::SeminalVesicle,
        TissueName::SkeletalMuscleTissue,
        TissueName::SmallIntestine,
        TissueName::SmoothMuscleTissue,
        TissueName::Spleen,
        TissueName::TelencephalicVentricle,
        TissueName::Testis,
        TissueName::ThyroidGland,
        TissueName::Tonsil,
        TissueName::UrinaryBladder,
        TissueName::Vagina,
        TissueName::VermiformAppendix,
    ];

    pub fn display_name(self) -> &'static str {
        self.entry().0
    }

    /// Sample id of the tissue in the expression-atlas experiment.
    pub fn tissue_id(self) -> u32 {
        self.entry().1
    }

    fn entry(self) -> (&'static str, u32) {
        match self {
            TissueName::AdrenalGland => ("Adrenal Gland", 2),
            TissueName::BoneMarrow => ("Bone Marrow", 3),
            TissueName::Breast => ("Breast", 4),
            TissueName::Bronchus => ("Bronchus", 5),
            TissueName::Cerebellum => ("Cerebellum", 6),
            TissueName::CerebralCortex => ("Cerebral Cortex", 7),
            TissueName::CervixUterine => ("Cervix - Uterine", 8),
            TissueName::Colon => ("Colon", 9),
            TissueName::Duodenum => ("Duodenum", 10),
            TissueName::Epididymis => ("Epididymis", 12),
            TissueName::Esophagus => ("Esophagus", 13),
            TissueName::FallopianTube => ("Fallopian Tube", 14),
            TissueName::GallBladder => ("Gall Bladder", 15),
            TissueName::HeartMuscle => ("Heart Muscle", 16),
            TissueName::HippocampalFormation => ("Hippocampal Formation", 17),
            TissueName::Kidney => ("Kidney", 18),
            TissueName::Liver => ("Liver", 19),
            TissueName::Lung => ("Lung", 20),
            TissueName::LymphNode => ("Lymph Node", 21),
            TissueName::Nasopharynx => ("Nasopharynx", 22),
            TissueName::OralMucosa => ("Oral Mucosa", 23),
            TissueName::Ovary => ("Ovary", 24),
            TissueName::Pancreas => ("Pancreas", 25),
            TissueName::ParathyroidGland => ("Parathyroid Gland", 26),
            TissueName::Placenta => ("Placenta", 27),
            TissueName::ProstateGland => ("Prostate Gland", 28),
            TissueName::Rectum => ("Rectum", 29),
            TissueName::SalivaSecretingGland => ("Saliva-secreting Gland", 30),
            TissueName::SeminalVesicle => ("Seminal Vesicle", 31),
            TissueName::SkeletalMuscleTissue => ("Skeletal Muscle Tissue", 32),
            TissueName::SmallIntestine => ("Small Intestine", 33),
            TissueName::SmoothMuscleTissue => ("Smooth Muscle Tissue", 34),
            TissueName::Spleen => ("Spleen", 36),
            TissueName::TelencephalicVentricle => ("Telencephalic Ventricle", 38),
            TissueName::Testis => ("Testis", 39),
            TissueName::ThyroidGland => ("Thyroid Gland", 40),
            TissueName::Tonsil => ("Tonsil", 41),
            TissueName::UrinaryBladder => ("Urinary Bladder", 42),
            TissueName::Vagina => ("Vagina", 43),
            TissueName::VermiformAppendix => ("Vermiform Appendix", 44),
        }
    }

    pub fn lookup(name: &str) -> Option<TissueName> {
        Self::ALL
            .into_iter()
            .find(|tissue| tissue.display_name().eq_ignore_ascii_case(name.trim()))
    }
}

impl FromStr for TissueName {
    type Err = ReactomeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TissueName::lookup(s).ok_or_else(|| ReactomeError::UnknownTissue(s.to_string()))
    }
}

impl fmt::Display for TissueName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Distinct tissue ids, ascending, comma-joined.
pub fn sorted_unique_tissue_ids(tissues: &[TissueName]) -> String {
    let mut ids: Vec<u32> = tissues.iter().map(|t| t.tissue_id()).collect();
    ids.sort_unstable();
    ids.dedup();
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// Identifier resource the download endpoints filter on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[cfg_attr(feature = "cli", value(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum ResourceType {
    #[default]
    Total,
    Uniprot,
    Ensembl,
    Chebi,
    Iuphar,
    Mirbase,
    NcbiProtein,
    Embl,
    Compound,
    PubchemCompound,
}

impl ResourceType {
    pub fn as_str(self) -> &'static str {
        match self {
            ResourceType::Total => "TOTAL",
            ResourceType::Uniprot => "UNIPROT",
            ResourceType::Ensembl => "ENSEMBL",
            ResourceType::Chebi => "CHEBI",
            ResourceType::Iuphar => "IUPHAR",
            ResourceType::Mirbase => "MIRBASE",
            ResourceType::NcbiProtein => "NCBI_PROTEIN",
            ResourceType::Embl => "EMBL",
            ResourceType::Compound => "COMPOUND",
            ResourceType::PubchemCompound => "PUBCHEM_COMPOUND",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
