use crate::domain::model::{AnalyzeRequest, FormData, PersonFields, PersonInput};
use crate::domain::zodiac::sign_for_birthdate;
use crate::utils::error::{Result, ZodiacError};
use crate::utils::validation::validate_required_field;
use std::path::Path;

impl PersonFields {
    pub fn to_input(&self) -> PersonInput {
        let zodiac_sign = sign_for_birthdate(&self.birthdate);
        tracing::debug!("Resolved {} ({}) to {}", self.name, self.birthdate, zodiac_sign);

        PersonInput {
            name: self.name.clone(),
            birthdate: self.birthdate.clone(),
            gender: self.gender.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            address: self.address.clone(),
            zodiac_sign,
        }
    }
}

impl FormData {
    /// Loads both person forms from a TOML file with `[person1]` and `[person2]` tables.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ZodiacError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| ZodiacError::ValidationError {
            message: format!("Form parsing error: {}", e),
        })
    }

    pub fn to_request(&self) -> Result<AnalyzeRequest> {
        let person1 = validate_required_field("person1", &self.person1)?;
        let person2 = validate_required_field("person2", &self.person2)?;

        Ok(AnalyzeRequest {
            person1: person1.to_input(),
            person2: person2.to_input(),
        })
    }
}
