use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A physician on staff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    license_number: String,
    specialty: String,
    certifications: BTreeSet<String>,
}

impl Doctor {
    pub fn new<I, S>(license_number: impl Into<String>, specialty: impl Into<String>, certifications: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            license_number: license_number.into(),
            specialty: specialty.into(),
            certifications: certifications.into_iter().map(Into::into).collect(),
        }
    }

    pub fn license_number(&self) -> &str {
        &self.license_number
    }

    pub fn specialty(&self) -> &str {
        &self.specialty
    }

    pub fn certifications(&self) -> BTreeSet<String> {
        self.certifications.clone()
    }
}

/// A nurse and the shift they work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nurse {
    nurse_id: String,
    shift: String,
    qualifications: Vec<String>,
}

impl Nurse {
    pub fn new<I, S>(nurse_id: impl Into<String>, shift: impl Into<String>, qualifications: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            nurse_id: nurse_id.into(),
            shift: shift.into(),
            qualifications: qualifications.into_iter().map(Into::into).collect(),
        }
    }

    pub fn nurse_id(&self) -> &str {
        &self.nurse_id
    }

    pub fn shift(&self) -> &str {
        &self.shift
    }

    pub fn qualifications(&self) -> Vec<String> {
        self.qualifications.clone()
    }
}

/// Hospital administration staff.
///
/// The permission list is informational: access to patients is granted by
/// being staff at all, the individual permissions are never checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Administrator {
    admin_id: String,
    access_permissions: Vec<String>,
}

impl Administrator {
    pub fn new<I, S>(admin_id: impl Into<String>, access_permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            admin_id: admin_id.into(),
            access_permissions: access_permissions.into_iter().map(Into::into).collect(),
        }
    }

    pub fn admin_id(&self) -> &str {
        &self.admin_id
    }

    pub fn access_permissions(&self) -> Vec<String> {
        self.access_permissions.clone()
    }
}

/// Every role that may admit patients and read their files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum StaffMember {
    Doctor(Doctor),
    Nurse(Nurse),
    Administrator(Administrator),
}

impl StaffMember {
    /// License number, nurse id or admin id, depending on the role.
    pub fn staff_id(&self) -> &str {
        match self {
            StaffMember::Doctor(d) => d.license_number(),
            StaffMember::Nurse(n) => n.nurse_id(),
            StaffMember::Administrator(a) => a.admin_id(),
        }
    }

    pub fn role(&self) -> StaffRole {
        match self {
            StaffMember::Doctor(_) => StaffRole::Doctor,
            StaffMember::Nurse(_) => StaffRole::Nurse,
            StaffMember::Administrator(_) => StaffRole::Administrator,
        }
    }
}

impl From<Doctor> for StaffMember {
    fn from(doctor: Doctor) -> Self {
        StaffMember::Doctor(doctor)
    }
}

impl From<Nurse> for StaffMember {
    fn from(nurse: Nurse) -> Self {
        StaffMember::Nurse(nurse)
    }
}

impl From<Administrator> for StaffMember {
    fn from(admin: Administrator) -> Self {
        StaffMember::Administrator(admin)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StaffRole {
    Doctor,
    Nurse,
    Administrator,
}

impl fmt::Display for StaffRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StaffRole::Doctor => "doctor",
            StaffRole::Nurse => "nurse",
            StaffRole::Administrator => "administrator",
        };
        f.write_str(name)
    }
}
