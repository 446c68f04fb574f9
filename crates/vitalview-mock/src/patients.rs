//! The patient roster, in picker order. Sarah Mitchell is the default selection.

use vitalview_contracts::patient::{Alert, AlertPriority, Demographics, Patient, PatientId};

pub const SARAH: &str = "Sarah Mitchell";
pub const DAVID: &str = "David McDonald";
pub const MARIA: &str = "Maria Rodriguez";
pub const JAMES: &str = "James Chen";
pub const LINDA: &str = "Linda Johnson";
pub const SAMANTHA: &str = "Samantha Reed";
pub const ROBERT: &str = "Robert Dwayne";
pub const JOHN: &str = "John Jimmerson";
pub const ALBERTO: &str = "Alberto Dantesandersonman";

struct Entry {
    id: &'static str,
    name: &'static str,
    age: u32,
    gender: &'static str,
    condition: &'static str,
    date_of_birth: &'static str,
    mrn: &'static str,
    phone: &'static str,
}

const ROSTER: [Entry; 9] = [
    Entry { id: "P001", name: SARAH, age: 45, gender: "Female", condition: "Diabetes Type 2", date_of_birth: "1978-03-15", mrn: "MRN-2024-001", phone: "(555) 123-4567" },
    Entry { id: "P002", name: DAVID, age: 62, gender: "Male", condition: "Hypertension", date_of_birth: "1961-08-22", mrn: "MRN-2024-002", phone: "(555) 234-5678" },
    Entry { id: "P003", name: MARIA, age: 38, gender: "Female", condition: "Hyperlipidemia", date_of_birth: "1985-12-10", mrn: "MRN-2024-003", phone: "(555) 345-6789" },
    Entry { id: "P004", name: JAMES, age: 29, gender: "Male", condition: "Healthy Adult", date_of_birth: "1994-05-18", mrn: "MRN-2024-004", phone: "(555) 456-7890" },
    Entry { id: "P005", name: LINDA, age: 71, gender: "Female", condition: "Pre-diabetes", date_of_birth: "1952-11-03", mrn: "MRN-2024-005", phone: "(555) 567-8901" },
    Entry { id: "P007", name: SAMANTHA, age: 61, gender: "Female", condition: "Pre-diabetes", date_of_birth: "1962-04-25", mrn: "MRN-2024-007", phone: "(555) 789-0123" },
    Entry { id: "P008", name: ROBERT, age: 43, gender: "Male", condition: "Diabetes Type 2", date_of_birth: "1980-09-14", mrn: "MRN-2024-008", phone: "(555) 890-1234" },
    Entry { id: "P009", name: JOHN, age: 38, gender: "Male", condition: "Healthy Adult", date_of_birth: "1985-07-12", mrn: "MRN-2024-009", phone: "(555) 901-2345" },
    Entry { id: "P010", name: ALBERTO, age: 58, gender: "Male", condition: "Healthy Adult", date_of_birth: "1965-01-30", mrn: "MRN-2024-010", phone: "(555) 012-3456" },
];

fn alerts_for(id: &str) -> Vec<Alert> {
    let alert = |id: &str, message: &str, date: &str| Alert {
        id: id.to_string(),
        priority: AlertPriority::High,
        kind: "clinical".to_string(),
        message: message.to_string(),
        date: date.to_string(),
        acknowledged: false,
    };
    match id {
        "P001" => vec![alert("alert-001", "HbA1c levels trending upward", "2023-09-15")],
        "P008" => vec![alert("alert-003", "Medication adherence review needed", "2023-09-18")],
        _ => Vec::new(),
    }
}

impl Entry {
    fn to_patient(&self) -> Patient {
        let mut patient = Patient {
            id: PatientId::new(self.id),
            name: self.name.to_string(),
            age: self.age,
            gender: self.gender.to_string(),
            condition: self.condition.to_string(),
            demographics: Demographics {
                date_of_birth: self.date_of_birth.to_string(),
                mrn: self.mrn.to_string(),
                phone: self.phone.to_string(),
                email: format!("{}@email.com", self.name.to_lowercase().replace(' ', ".")),
                photo: String::new(),
            },
            alerts: alerts_for(self.id),
        };
        patient.demographics.photo = format!(
            "https://api.dicebear.com/8.x/initials/svg?seed={}",
            patient.initials()
        );
        patient
    }
}

pub fn patients() -> Vec<Patient> {
    ROSTER.iter().map(Entry::to_patient).collect()
}
