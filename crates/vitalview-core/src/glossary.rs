//! Plain-language definitions shown next to biomarkers when a view enables
//! educational content.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GlossaryEntry {
    pub term: &'static str,
    pub title: &'static str,
    pub definition: &'static str,
    pub normal_range: Option<&'static str>,
}

static ENTRIES: &[GlossaryEntry] = &[
    GlossaryEntry {
        term: "glucose",
        title: "Blood Glucose",
        definition: "The amount of sugar (glucose) in your blood. Your body uses glucose for energy.",
        normal_range: Some("Normal: 70-99 mg/dL (fasting)"),
    },
    GlossaryEntry {
        term: "hba1c",
        title: "HbA1c (Hemoglobin A1c)",
        definition: "Shows your average blood sugar level over the past 2-3 months. It measures how much glucose is attached to your red blood cells.",
        normal_range: Some("Normal: Less than 5.7%"),
    },
    GlossaryEntry {
        term: "cholesterol",
        title: "Total Cholesterol",
        definition: "A waxy substance in your blood. Your body needs some cholesterol, but too much can increase heart disease risk.",
        normal_range: Some("Desirable: Less than 200 mg/dL"),
    },
    GlossaryEntry {
        term: "blood-pressure",
        title: "Blood Pressure",
        definition: "The force of blood pushing against your artery walls. Measured as systolic (top number) over diastolic (bottom number).",
        normal_range: Some("Normal: Less than 120/80 mmHg"),
    },
    GlossaryEntry {
        term: "triglycerides",
        title: "Triglycerides",
        definition: "A type of fat in your blood. High levels can increase your risk of heart disease.",
        normal_range: Some("Normal: Less than 150 mg/dL"),
    },
    GlossaryEntry {
        term: "hdl",
        title: "HDL Cholesterol",
        definition: "High-density lipoprotein, often called \"good\" cholesterol. It helps remove other forms of cholesterol from your bloodstream.",
        normal_range: Some("Good: 40+ mg/dL (men), 50+ mg/dL (women)"),
    },
    GlossaryEntry {
        term: "ldl",
        title: "LDL Cholesterol",
        definition: "Low-density lipoprotein, often called \"bad\" cholesterol. High levels can build up in your arteries.",
        normal_range: Some("Optimal: Less than 100 mg/dL"),
    },
    GlossaryEntry {
        term: "creatinine",
        title: "Creatinine",
        definition: "A waste product from muscle breakdown. High levels may indicate kidney problems.",
        normal_range: Some("Normal: 0.6-1.2 mg/dL"),
    },
    GlossaryEntry {
        term: "bun",
        title: "BUN (Blood Urea Nitrogen)",
        definition: "A waste product filtered by your kidneys. High levels may indicate kidney or liver problems.",
        normal_range: Some("Normal: 7-20 mg/dL"),
    },
    GlossaryEntry {
        term: "egfr",
        title: "eGFR (Estimated Glomerular Filtration Rate)",
        definition: "Measures how well your kidneys filter waste from your blood. Lower numbers indicate reduced kidney function.",
        normal_range: Some("Normal: 90+ mL/min/1.73m²"),
    },
    GlossaryEntry {
        term: "diabetes",
        title: "Diabetes",
        definition: "A chronic condition where your body cannot properly process blood sugar (glucose). Type 2 diabetes is the most common form.",
        normal_range: Some("Diagnosis: HbA1c ≥ 6.5% or fasting glucose ≥ 126 mg/dL"),
    },
    GlossaryEntry {
        term: "hypertension",
        title: "Hypertension (High Blood Pressure)",
        definition: "A condition where blood pressure is consistently elevated, putting extra strain on your heart and blood vessels.",
        normal_range: Some("High: ≥ 130/80 mmHg"),
    },
    GlossaryEntry {
        term: "bmi",
        title: "BMI (Body Mass Index)",
        definition: "A measure of body fat based on height and weight. Used to assess if you are underweight, normal weight, overweight, or obese.",
        normal_range: Some("Normal: 18.5-24.9 kg/m²"),
    },
    GlossaryEntry {
        term: "weight",
        title: "Body Weight",
        definition: "The measurement of body mass, an important indicator of overall health. Changes in weight can signal underlying health issues.",
        normal_range: Some("Varies based on height, age, and sex. Often assessed using BMI."),
    },
];

/// Every entry, in display order.
pub fn entries() -> &'static [GlossaryEntry] {
    ENTRIES
}

pub fn lookup(term: &str) -> Option<&'static GlossaryEntry> {
    ENTRIES.iter().find(|e| e.term == term)
}

/// Glossary term for a lab test name, e.g. "Total Cholesterol" → "cholesterol".
pub fn term_for_test(test_name: &str) -> Option<&'static str> {
    match test_name {
        "Glucose" => Some("glucose"),
        "HbA1c" => Some("hba1c"),
        "Total Cholesterol" => Some("cholesterol"),
        "Blood Pressure" => Some("blood-pressure"),
        "Weight" => Some("weight"),
        _ => None,
    }
}

/// Entry for a lab test name, if the glossary covers it.
pub fn for_test(test_name: &str) -> Option<&'static GlossaryEntry> {
    term_for_test(test_name).and_then(lookup)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_mapped_test_has_an_entry() {
        for test in ["Glucose", "HbA1c", "Total Cholesterol", "Blood Pressure", "Weight"] {
            assert!(for_test(test).is_some(), "{test}");
        }
        assert!(for_test("Ferritin").is_none());
    }

    #[test]
    fn terms_are_unique() {
        let mut terms: Vec<_> = entries().iter().map(|e| e.term).collect();
        terms.sort_unstable();
        terms.dedup();
        assert_eq!(terms.len(), entries().len());
    }

    #[test]
    fn lookup_by_term() {
        let entry = lookup("blood-pressure").unwrap();
        assert_eq!(entry.title, "Blood Pressure");
        assert!(lookup("Blood Pressure").is_none());
    }
}
