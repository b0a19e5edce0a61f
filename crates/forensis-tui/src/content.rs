//! Static panel copy
//!
//! Each section maps to a title and a body. Substance panels splice a data
//! card built from the catalog into their prose; the reference table panel
//! is rendered as a table widget instead and only contributes its intro
//! here.

use forensis_core::{Section, SubstanceCatalog, SubstanceRecord};

/// Heading shown in the content panel border.
pub fn heading(section: Section) -> String {
    match section {
        Section::Hero => "Forensic Chemistry".to_string(),
        Section::Methodology => "Analytical Methodology".to_string(),
        Section::Alcohol => "Ethanol Analysis".to_string(),
        Section::Cocaine => "Cocaine Identification".to_string(),
        Section::Blood => "Blood Evidence".to_string(),
        Section::Drugs => "Drug Screening".to_string(),
        Section::AdditionalSubstances => "Substance Reference Table".to_string(),
    }
}

/// Body text for a section, one entry per row.
pub fn body(section: Section, catalog: &SubstanceCatalog) -> Vec<String> {
    match section {
        Section::Hero => hero(),
        Section::Methodology => methodology(),
        Section::Alcohol => substance_panel(
            catalog.get("alcohol"),
            &[
                "Ethanol is the most frequently encountered substance in",
                "forensic casework. Blood alcohol concentration is determined",
                "by headspace gas chromatography: a sealed, heated sample",
                "equilibrates so the vapor phase can be injected without",
                "touching the blood matrix itself.",
                "",
                "Duplicate analysis on two different columns guards against",
                "co-eluting volatiles such as isopropanol or acetone, which",
                "appear in diabetic ketoacidosis and solvent exposure cases.",
                "",
                "Widmark's formula back-extrapolates a concentration to the",
                "time of an incident, assuming post-absorptive elimination",
                "at roughly 0.015 g/100 mL per hour.",
            ],
        ),
        Section::Cocaine => substance_panel(
            catalog.get("cocaine"),
            &[
                "Cocaine reaches the laboratory as the hydrochloride salt or",
                "the free base. The Scott test (cobalt thiocyanate) gives a",
                "presumptive blue result; confirmation requires GC-MS, where",
                "the base peak at m/z 182 and ions at 303 and 82 identify the",
                "molecule unambiguously.",
                "",
                "Quantitation matters legally: many jurisdictions grade",
                "offences by mass of the pure drug, not of the seized powder,",
                "so purity is reported alongside identity.",
            ],
        ),
        Section::Blood => blood(),
        Section::Drugs => drugs(),
        // Rendered as a table; the intro row is all the prose it needs.
        Section::AdditionalSubstances => vec![
            "Reference data for substances recurring in seized samples.".to_string(),
        ],
    }
}

fn hero() -> Vec<String> {
    to_owned(&[
        "",
        "Chemistry answers the questions a crime scene asks:",
        "what is this substance, how much of it is there, and",
        "what does that concentration mean?",
        "",
        "This reference walks through the analytical methods",
        "behind those answers, from presumptive color tests at",
        "the bench to confirmatory mass spectrometry.",
        "",
        "Navigate with the tabs above, digits 1-7, or Tab.",
    ])
}

fn methodology() -> Vec<String> {
    to_owned(&[
        "Forensic analysis proceeds in two stages: a fast, cheap",
        "presumptive test that can exclude a hypothesis, then a",
        "confirmatory technique whose result stands up in court.",
        "",
        "Presumptive techniques",
        "  - Color (spot) tests: Marquis, Scott, Duquenois-Levine",
        "  - Thin-layer chromatography against reference standards",
        "  - Immunoassay screens for biological specimens",
        "",
        "Confirmatory techniques",
        "  - Gas chromatography-mass spectrometry (GC-MS), the",
        "    workhorse for volatile and derivatized analytes",
        "  - Liquid chromatography-tandem MS for thermally fragile",
        "    compounds and low-concentration metabolites",
        "  - Fourier-transform infrared spectroscopy for intact",
        "    solids such as tablets and crystalline powders",
        "",
        "Every result travels with its chain of custody: who held",
        "the exhibit, when, and what was done to it. An analytical",
        "result without provenance is an anecdote, not evidence.",
    ])
}

fn blood() -> Vec<String> {
    to_owned(&[
        "Blood at a scene is located, presumptively identified,",
        "and only then sampled for DNA and toxicology.",
        "",
        "Luminol oxidation, catalyzed by the iron of hemoglobin,",
        "produces the familiar blue chemiluminescence. It is",
        "sensitive to dilutions past 1:1,000,000 but reacts with",
        "bleach and some vegetable peroxidases, so a glow is a",
        "lead, not a conclusion.",
        "",
        "The Kastle-Meyer test uses phenolphthalein reduced to its",
        "colorless form; a drop of peroxide over a swab of the",
        "stain brings back the pink within seconds when heme is",
        "present.",
        "",
        "Confirmation falls to microscopy and species-specific",
        "immunochromatographic strips before any DNA workflow",
        "begins.",
    ])
}

fn drugs() -> Vec<String> {
    to_owned(&[
        "Seized-drug screening leans on color chemistry read",
        "against a known reaction table:",
        "",
        "  Marquis          opiates -> purple, amphetamines -> orange",
        "  Scott            cocaine -> blue",
        "  Duquenois-Levine cannabis -> purple, chloroform layer",
        "  Simon's          secondary amines (MDMA) -> blue",
        "",
        "A positive screen justifies instrument time, nothing",
        "more. Sugars, caffeine and lidocaine cut into street",
        "samples routinely fool single reagents, which is why",
        "identification is only ever claimed from a confirmatory",
        "spectrum.",
    ])
}

/// Prose panel with a data card for one substance spliced on top.
fn substance_panel(record: Option<&SubstanceRecord>, prose: &[&str]) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(record) = record {
        lines.extend(substance_card(record));
        lines.push(String::new());
    }
    lines.extend(prose.iter().map(|s| s.to_string()));
    lines
}

/// Aligned key/value card for one substance record.
pub fn substance_card(record: &SubstanceRecord) -> Vec<String> {
    vec![
        format!("  {:<18}{}", "Name", record.name),
        format!("  {:<18}{}", "Formula", record.formula),
        format!("  {:<18}{} g/mol", "Molecular weight", record.molecular_weight),
        format!("  {:<18}{}", "Phase point", record.phase_point.display()),
        format!("  {:<18}{}", "Notes", record.description),
    ]
}

fn to_owned(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|s| s.to_string()).collect()
}
