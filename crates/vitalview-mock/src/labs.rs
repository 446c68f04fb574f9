//! Lab result history: five visits per patient, 2024-01-15 through 2024-09-15.
//!
//! Rows reference patients by display name. Some record ids repeat across
//! patients; ids are only unique within a patient's history.

use vitalview_contracts::lab::{
    LabResult,
    LabStatus::{self, *},
    LabValue,
};

use crate::patients::{ALBERTO, DAVID, JAMES, JOHN, LINDA, MARIA, ROBERT, SAMANTHA, SARAH};

/// A lab test's fixed unit and printed reference range.
struct Test {
    name: &'static str,
    unit: &'static str,
    range: &'static str,
}

const GLUCOSE: Test = Test { name: "Glucose", unit: "mg/dL", range: "70-99 mg/dL" };
const HBA1C: Test = Test { name: "HbA1c", unit: "%", range: "4.0-5.6%" };
const CHOLESTEROL: Test = Test { name: "Total Cholesterol", unit: "mg/dL", range: "<200 mg/dL" };
const BLOOD_PRESSURE: Test = Test { name: "Blood Pressure", unit: "mmHg", range: "<120/80 mmHg" };
const WEIGHT: Test = Test { name: "Weight", unit: "lbs", range: "160-190 lbs" };

fn row(
    id: &str,
    patient: &str,
    test: &Test,
    value: impl Into<LabValue>,
    status: LabStatus,
    date: &str,
) -> LabResult {
    LabResult {
        id: id.to_string(),
        patient: patient.to_string(),
        test_name: test.name.to_string(),
        value: value.into(),
        unit: test.unit.to_string(),
        status,
        reference_range: test.range.to_string(),
        date: date.to_string(),
    }
}

/// Every lab result row, grouped by patient then visit.
pub fn lab_results() -> Vec<LabResult> {
    vec![
        // Sarah Mitchell
        row("1", SARAH, &GLUCOSE, 145.0, High, "2024-01-15"),
        row("2", SARAH, &HBA1C, 7.2, High, "2024-01-15"),
        row("3", SARAH, &CHOLESTEROL, 185.0, Normal, "2024-01-15"),
        row("4", SARAH, &BLOOD_PRESSURE, "128/82", Elevated, "2024-01-15"),

        row("5", SARAH, &GLUCOSE, 138.0, High, "2024-02-20"),
        row("6", SARAH, &HBA1C, 6.9, High, "2024-02-20"),
        row("7", SARAH, &CHOLESTEROL, 178.0, Normal, "2024-02-20"),
        row("8", SARAH, &BLOOD_PRESSURE, "125/80", Elevated, "2024-02-20"),

        row("9", SARAH, &GLUCOSE, 132.0, High, "2024-04-10"),
        row("10", SARAH, &HBA1C, 6.7, High, "2024-04-10"),
        row("11", SARAH, &CHOLESTEROL, 172.0, Normal, "2024-04-10"),
        row("12", SARAH, &BLOOD_PRESSURE, "122/78", Elevated, "2024-04-10"),

        row("13", SARAH, &GLUCOSE, 125.0, Elevated, "2024-06-25"),
        row("14", SARAH, &HBA1C, 6.4, Elevated, "2024-06-25"),
        row("15", SARAH, &CHOLESTEROL, 168.0, Normal, "2024-06-25"),
        row("16", SARAH, &BLOOD_PRESSURE, "119/76", Normal, "2024-06-25"),

        row("17", SARAH, &GLUCOSE, 118.0, Elevated, "2024-09-15"),
        row("18", SARAH, &HBA1C, 6.1, Elevated, "2024-09-15"),
        row("19", SARAH, &CHOLESTEROL, 165.0, Normal, "2024-09-15"),
        row("20", SARAH, &BLOOD_PRESSURE, "116/74", Normal, "2024-09-15"),

        // David McDonald
        row("21", DAVID, &GLUCOSE, 92.0, Normal, "2024-01-15"),
        row("22", DAVID, &HBA1C, 5.4, Normal, "2024-01-15"),
        row("23", DAVID, &CHOLESTEROL, 215.0, Elevated, "2024-01-15"),
        row("24", DAVID, &BLOOD_PRESSURE, "142/95", High, "2024-01-15"),

        row("25", DAVID, &GLUCOSE, 89.0, Normal, "2024-02-20"),
        row("26", DAVID, &HBA1C, 5.2, Normal, "2024-02-20"),
        row("27", DAVID, &CHOLESTEROL, 208.0, Elevated, "2024-02-20"),
        row("28", DAVID, &BLOOD_PRESSURE, "138/92", High, "2024-02-20"),

        row("29", DAVID, &GLUCOSE, 86.0, Normal, "2024-04-10"),
        row("30", DAVID, &HBA1C, 5.1, Normal, "2024-04-10"),
        row("31", DAVID, &CHOLESTEROL, 202.0, Elevated, "2024-04-10"),
        row("32", DAVID, &BLOOD_PRESSURE, "135/88", Elevated, "2024-04-10"),

        row("33", DAVID, &GLUCOSE, 84.0, Normal, "2024-06-25"),
        row("34", DAVID, &HBA1C, 5.0, Normal, "2024-06-25"),
        row("35", DAVID, &CHOLESTEROL, 195.0, Normal, "2024-06-25"),
        row("36", DAVID, &BLOOD_PRESSURE, "128/82", Elevated, "2024-06-25"),

        row("37", DAVID, &GLUCOSE, 82.0, Normal, "2024-09-15"),
        row("38", DAVID, &HBA1C, 4.9, Normal, "2024-09-15"),
        row("39", DAVID, &CHOLESTEROL, 188.0, Normal, "2024-09-15"),
        row("40", DAVID, &BLOOD_PRESSURE, "124/78", Elevated, "2024-09-15"),

        // Maria Rodriguez
        row("41", MARIA, &GLUCOSE, 88.0, Normal, "2024-01-15"),
        row("42", MARIA, &HBA1C, 5.1, Normal, "2024-01-15"),
        row("43", MARIA, &CHOLESTEROL, 285.0, High, "2024-01-15"),
        row("44", MARIA, &BLOOD_PRESSURE, "118/76", Normal, "2024-01-15"),

        row("45", MARIA, &GLUCOSE, 85.0, Normal, "2024-02-20"),
        row("46", MARIA, &HBA1C, 5.0, Normal, "2024-02-20"),
        row("47", MARIA, &CHOLESTEROL, 268.0, High, "2024-02-20"),
        row("48", MARIA, &BLOOD_PRESSURE, "115/74", Normal, "2024-02-20"),

        row("49", MARIA, &GLUCOSE, 83.0, Normal, "2024-04-10"),
        row("50", MARIA, &HBA1C, 4.9, Normal, "2024-04-10"),
        row("51", MARIA, &CHOLESTEROL, 245.0, High, "2024-04-10"),
        row("52", MARIA, &BLOOD_PRESSURE, "112/72", Normal, "2024-04-10"),

        row("53", MARIA, &GLUCOSE, 81.0, Normal, "2024-06-25"),
        row("54", MARIA, &HBA1C, 4.8, Normal, "2024-06-25"),
        row("55", MARIA, &CHOLESTEROL, 225.0, Elevated, "2024-06-25"),
        row("56", MARIA, &BLOOD_PRESSURE, "110/70", Normal, "2024-06-25"),

        row("57", MARIA, &GLUCOSE, 79.0, Normal, "2024-09-15"),
        row("58", MARIA, &HBA1C, 4.7, Normal, "2024-09-15"),
        row("59", MARIA, &CHOLESTEROL, 198.0, Normal, "2024-09-15"),
        row("60", MARIA, &BLOOD_PRESSURE, "108/68", Normal, "2024-09-15"),

        // James Chen
        row("61", JAMES, &GLUCOSE, 85.0, Normal, "2024-01-15"),
        row("62", JAMES, &HBA1C, 4.8, Normal, "2024-01-15"),
        row("63", JAMES, &CHOLESTEROL, 165.0, Normal, "2024-01-15"),
        row("64", JAMES, &BLOOD_PRESSURE, "115/72", Normal, "2024-01-15"),

        row("65", JAMES, &GLUCOSE, 87.0, Normal, "2024-02-20"),
        row("66", JAMES, &HBA1C, 4.9, Normal, "2024-02-20"),
        row("67", JAMES, &CHOLESTEROL, 162.0, Normal, "2024-02-20"),
        row("68", JAMES, &BLOOD_PRESSURE, "112/70", Normal, "2024-02-20"),

        row("69", JAMES, &GLUCOSE, 83.0, Normal, "2024-04-10"),
        row("70", JAMES, &HBA1C, 4.7, Normal, "2024-04-10"),
        row("71", JAMES, &CHOLESTEROL, 158.0, Normal, "2024-04-10"),
        row("72", JAMES, &BLOOD_PRESSURE, "110/68", Normal, "2024-04-10"),

        row("73", JAMES, &GLUCOSE, 81.0, Normal, "2024-06-25"),
        row("74", JAMES, &HBA1C, 4.6, Normal, "2024-06-25"),
        row("75", JAMES, &CHOLESTEROL, 155.0, Normal, "2024-06-25"),
        row("76", JAMES, &BLOOD_PRESSURE, "108/66", Normal, "2024-06-25"),

        row("77", JAMES, &GLUCOSE, 79.0, Normal, "2024-09-15"),
        row("78", JAMES, &HBA1C, 4.5, Normal, "2024-09-15"),
        row("79", JAMES, &CHOLESTEROL, 152.0, Normal, "2024-09-15"),
        row("80", JAMES, &BLOOD_PRESSURE, "106/64", Normal, "2024-09-15"),

        // Linda Johnson
        row("81", LINDA, &GLUCOSE, 118.0, Elevated, "2024-01-15"),
        row("82", LINDA, &HBA1C, 6.2, Elevated, "2024-01-15"),
        row("83", LINDA, &CHOLESTEROL, 198.0, Normal, "2024-01-15"),
        row("84", LINDA, &BLOOD_PRESSURE, "135/88", Elevated, "2024-01-15"),

        row("85", LINDA, &GLUCOSE, 115.0, Elevated, "2024-02-20"),
        row("86", LINDA, &HBA1C, 6.0, Elevated, "2024-02-20"),
        row("87", LINDA, &CHOLESTEROL, 192.0, Normal, "2024-02-20"),
        row("88", LINDA, &BLOOD_PRESSURE, "132/85", Elevated, "2024-02-20"),

        row("89", LINDA, &GLUCOSE, 112.0, Elevated, "2024-04-10"),
        row("90", LINDA, &HBA1C, 5.8, Elevated, "2024-04-10"),
        row("91", LINDA, &CHOLESTEROL, 188.0, Normal, "2024-04-10"),
        row("92", LINDA, &BLOOD_PRESSURE, "128/82", Elevated, "2024-04-10"),

        row("93", LINDA, &GLUCOSE, 108.0, Elevated, "2024-06-25"),
        row("94", LINDA, &HBA1C, 5.7, Elevated, "2024-06-25"),
        row("95", LINDA, &CHOLESTEROL, 185.0, Normal, "2024-06-25"),
        row("96", LINDA, &BLOOD_PRESSURE, "125/79", Elevated, "2024-06-25"),

        row("97", LINDA, &GLUCOSE, 105.0, Elevated, "2024-09-15"),
        row("98", LINDA, &HBA1C, 5.6, Normal, "2024-09-15"),
        row("99", LINDA, &CHOLESTEROL, 182.0, Normal, "2024-09-15"),
        row("100", LINDA, &BLOOD_PRESSURE, "122/76", Elevated, "2024-09-15"),

        // Alberto Dantesandersonman
        row("101", ALBERTO, &GLUCOSE, 240.0, High, "2024-01-15"),
        row("102", ALBERTO, &HBA1C, 8.5, High, "2024-01-15"),
        row("103", ALBERTO, &CHOLESTEROL, 220.0, Normal, "2024-01-15"),
        row("104", ALBERTO, &BLOOD_PRESSURE, "145/95", Elevated, "2024-01-15"),

        row("105", ALBERTO, &GLUCOSE, 225.0, High, "2024-02-20"),
        row("106", ALBERTO, &HBA1C, 8.2, High, "2024-02-20"),
        row("107", ALBERTO, &CHOLESTEROL, 215.0, Normal, "2024-02-20"),
        row("108", ALBERTO, &BLOOD_PRESSURE, "140/92", Elevated, "2024-02-20"),

        row("109", ALBERTO, &GLUCOSE, 210.0, High, "2024-04-10"),
        row("110", ALBERTO, &HBA1C, 8.0, High, "2024-04-10"),
        row("111", ALBERTO, &CHOLESTEROL, "210", Normal, "2024-04-10"),
        row("112", ALBERTO, &BLOOD_PRESSURE, "135/88", Elevated, "2024-04-10"),

        row("113", ALBERTO, &GLUCOSE, 195.0, High, "2024-06-25"),
        row("114", ALBERTO, &HBA1C, 7.8, High, "2024-06-25"),
        row("115", ALBERTO, &CHOLESTEROL, 205.0, Normal, "2024-06-25"),
        row("116", ALBERTO, &BLOOD_PRESSURE, "130/85", Elevated, "2024-06-25"),

        row("117", ALBERTO, &GLUCOSE, 180.0, High, "2024-09-15"),
        row("118", ALBERTO, &HBA1C, 7.5, High, "2024-09-15"),
        row("119", ALBERTO, &CHOLESTEROL, 200.0, Normal, "2024-09-15"),
        row("120", ALBERTO, &BLOOD_PRESSURE, "125/80", Elevated, "2024-09-15"),

        // Robert Dwayne
        row("121", ROBERT, &GLUCOSE, 145.0, High, "2024-01-15"),
        row("122", ROBERT, &HBA1C, 7.2, High, "2024-01-15"),
        row("123", ROBERT, &CHOLESTEROL, 185.0, Normal, "2024-01-15"),
        row("124", ROBERT, &BLOOD_PRESSURE, "128/82", Elevated, "2024-01-15"),

        row("125", ROBERT, &GLUCOSE, 145.0, High, "2024-02-20"),
        row("126", ROBERT, &HBA1C, 7.2, High, "2024-02-20"),
        row("127", ROBERT, &CHOLESTEROL, 185.0, Normal, "2024-02-20"),
        row("128", ROBERT, &BLOOD_PRESSURE, "128/82", Elevated, "2024-02-20"),

        row("129", ROBERT, &GLUCOSE, 145.0, High, "2024-04-10"),
        row("130", ROBERT, &HBA1C, 7.2, High, "2024-04-10"),
        row("131", ROBERT, &CHOLESTEROL, 185.0, Normal, "2024-04-10"),
        row("132", ROBERT, &BLOOD_PRESSURE, "128/82", Elevated, "2024-04-10"),

        row("133", ROBERT, &GLUCOSE, 145.0, High, "2024-06-25"),
        row("134", ROBERT, &HBA1C, 7.2, High, "2024-06-25"),
        row("135", ROBERT, &CHOLESTEROL, 185.0, Normal, "2024-06-25"),
        row("136", ROBERT, &BLOOD_PRESSURE, "128/82", Elevated, "2024-06-25"),

        row("137", ROBERT, &GLUCOSE, 145.0, High, "2024-09-15"),
        row("138", ROBERT, &HBA1C, 7.2, High, "2024-09-15"),
        row("139", ROBERT, &CHOLESTEROL, 185.0, Normal, "2024-09-15"),
        row("140", ROBERT, &BLOOD_PRESSURE, "128/82", Elevated, "2024-09-15"),

        // John Jimmerson
        row("141", JOHN, &GLUCOSE, 92.0, Normal, "2024-01-15"),
        row("142", JOHN, &HBA1C, 5.4, Normal, "2024-01-15"),
        row("143", JOHN, &CHOLESTEROL, 215.0, Normal, "2024-01-15"),
        row("144", JOHN, &BLOOD_PRESSURE, "142/95", High, "2024-01-15"),
        row("145", JOHN, &WEIGHT, 195.0, Normal, "2024-01-15"),

        row("146", JOHN, &GLUCOSE, 92.0, Normal, "2024-02-20"),
        row("147", JOHN, &HBA1C, 5.4, Normal, "2024-02-20"),
        row("148", JOHN, &CHOLESTEROL, 215.0, Normal, "2024-02-20"),
        row("149", JOHN, &BLOOD_PRESSURE, "142/95", High, "2024-02-20"),
        row("150", JOHN, &WEIGHT, 195.0, Normal, "2024-02-20"),

        row("151", JOHN, &GLUCOSE, 92.0, Normal, "2024-04-10"),
        row("152", JOHN, &HBA1C, 5.4, Normal, "2024-04-10"),
        row("153", JOHN, &CHOLESTEROL, 215.0, Normal, "2024-04-10"),
        row("154", JOHN, &BLOOD_PRESSURE, "142/95", High, "2024-04-10"),
        row("155", JOHN, &WEIGHT, 195.0, Normal, "2024-04-10"),

        row("156", JOHN, &GLUCOSE, 92.0, Normal, "2024-06-25"),
        row("157", JOHN, &HBA1C, 5.4, Normal, "2024-06-25"),
        row("158", JOHN, &CHOLESTEROL, 215.0, Normal, "2024-06-25"),
        row("159", JOHN, &BLOOD_PRESSURE, "142/95", High, "2024-06-25"),
        row("160", JOHN, &WEIGHT, 195.0, Normal, "2024-06-25"),

        row("161", JOHN, &GLUCOSE, 92.0, Normal, "2024-09-15"),
        row("162", JOHN, &HBA1C, 5.4, Normal, "2024-09-15"),
        row("163", JOHN, &CHOLESTEROL, 215.0, Normal, "2024-09-15"),
        row("164", JOHN, &BLOOD_PRESSURE, "142/95", High, "2024-09-15"),
        row("165", JOHN, &WEIGHT, 195.0, Normal, "2024-09-15"),

        // Samantha Reed
        row("146", SAMANTHA, &GLUCOSE, 92.0, Normal, "2024-01-15"),
        row("147", SAMANTHA, &HBA1C, 5.4, Normal, "2024-01-15"),
        row("150", SAMANTHA, &WEIGHT, 195.0, Normal, "2024-01-15"),
        row("151", SAMANTHA, &CHOLESTEROL, 215.0, Normal, "2024-01-15"),
        row("152", SAMANTHA, &BLOOD_PRESSURE, "142/95", High, "2024-01-15"),

        row("151", SAMANTHA, &GLUCOSE, 92.0, Normal, "2024-02-20"),
        row("152", SAMANTHA, &HBA1C, 5.4, Normal, "2024-02-20"),
        row("153", SAMANTHA, &WEIGHT, 195.0, Normal, "2024-02-20"),
        row("154", SAMANTHA, &CHOLESTEROL, 215.0, Normal, "2024-02-20"),
        row("155", SAMANTHA, &BLOOD_PRESSURE, "142/95", High, "2024-02-20"),

        row("154", SAMANTHA, &GLUCOSE, 92.0, Normal, "2024-04-10"),
        row("155", SAMANTHA, &HBA1C, 5.4, Normal, "2024-04-10"),
        row("156", SAMANTHA, &WEIGHT, 195.0, Normal, "2024-04-10"),
        row("157", SAMANTHA, &CHOLESTEROL, 215.0, Normal, "2024-04-10"),
        row("158", SAMANTHA, &BLOOD_PRESSURE, "142/95", High, "2024-04-10"),

        row("157", SAMANTHA, &GLUCOSE, 92.0, Normal, "2024-06-25"),
        row("158", SAMANTHA, &HBA1C, 5.4, Normal, "2024-06-25"),
        row("159", SAMANTHA, &WEIGHT, 195.0, Normal, "2024-06-25"),
        row("160", SAMANTHA, &CHOLESTEROL, 215.0, Normal, "2024-06-25"),
        row("161", SAMANTHA, &BLOOD_PRESSURE, "142/95", High, "2024-06-25"),

        row("160", SAMANTHA, &GLUCOSE, 92.0, Normal, "2024-09-15"),
        row("161", SAMANTHA, &HBA1C, 5.4, Normal, "2024-09-15"),
        row("162", SAMANTHA, &WEIGHT, 195.0, Normal, "2024-09-15"),
        row("163", SAMANTHA, &CHOLESTEROL, 215.0, Normal, "2024-09-15"),
        row("164", SAMANTHA, &BLOOD_PRESSURE, "142/95", High, "2024-09-15"),
    ]
}
