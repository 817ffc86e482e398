use serde::{Deserialize, Serialize};

/// A registered farmer.
///
/// `email` carries the unique key of the directory: inserting a second
/// farmer with the same email is absorbed by the repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Farmer {
    pub id: i32,
    pub name: String,
    pub location: String,
    pub crops: String,
    pub phone: String,
    pub email: String,
}

/// The writable fields of a farmer, used for both insert and full replacement.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FarmerProfile {
    pub name: String,
    pub location: String,
    pub crops: String,
    pub phone: String,
    pub email: String,
}

/// Listing view of a farmer. Contact details are left out on purpose.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FarmerSummary {
    pub id: i32,
    pub name: String,
    pub location: String,
    pub crops: String,
}

impl Farmer {
    pub fn from_profile(id: i32, profile: FarmerProfile) -> Self {
        Self {
            id,
            name: profile.name,
            location: profile.location,
            crops: profile.crops,
            phone: profile.phone,
            email: profile.email,
        }
    }

    pub fn profile(&self) -> FarmerProfile {
        FarmerProfile {
            name: self.name.clone(),
            location: self.location.clone(),
            crops: self.crops.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
        }
    }

    pub fn summary(&self) -> FarmerSummary {
        FarmerSummary {
            id: self.id,
            name: self.name.clone(),
            location: self.location.clone(),
            crops: self.crops.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> FarmerProfile {
        FarmerProfile {
            name: "Asha".to_string(),
            location: "Nashik".to_string(),
            crops: "Grapes, Onion".to_string(),
            phone: "9800000001".to_string(),
            email: "asha@example.com".to_string(),
        }
    }

    #[test]
    fn test_from_profile_keeps_every_field() {
        let farmer = Farmer::from_profile(7, profile());

        assert_eq!(farmer.id, 7);
        assert_eq!(farmer.profile(), profile());
    }

    #[test]
    fn test_summary_omits_contact_details() {
        let summary = Farmer::from_profile(3, profile()).summary();

        assert_eq!(
            summary,
            FarmerSummary {
                id: 3,
                name: "Asha".to_string(),
                location: "Nashik".to_string(),
                crops: "Grapes, Onion".to_string(),
            }
        );
    }
}
