use serde::{Deserialize, Serialize};

/// A course offering.
///
/// `prerequisites` is the catalog description shown to students. Enrollment
/// decisions use the registrar's [`PrerequisiteTable`](super::PrerequisiteTable).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    course_code: String,
    title: String,
    credit_hours: u32,
    prerequisites: Vec<String>,
}

impl Course {
    pub fn new<I, S>(course_code: impl Into<String>, title: impl Into<String>, credit_hours: u32, prerequisites: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            course_code: course_code.into(),
            title: title.into(),
            credit_hours,
            prerequisites: prerequisites.into_iter().map(Into::into).collect(),
        }
    }

    pub fn course_code(&self) -> &str {
        &self.course_code
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn credit_hours(&self) -> u32 {
        self.credit_hours
    }

    pub fn prerequisites(&self) -> Vec<String> {
        self.prerequisites.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Professor {
    faculty_id: String,
    department: String,
    qualifications: Vec<String>,
}

impl Professor {
    pub fn new<I, S>(faculty_id: impl Into<String>, department: impl Into<String>, qualifications: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            faculty_id: faculty_id.into(),
            department: department.into(),
            qualifications: qualifications.into_iter().map(Into::into).collect(),
        }
    }

    pub fn faculty_id(&self) -> &str {
        &self.faculty_id
    }

    pub fn department(&self) -> &str {
        &self.department
    }

    pub fn qualifications(&self) -> Vec<String> {
        self.qualifications.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classroom {
    room_number: String,
    capacity: u32,
    equipment: Vec<String>,
}

impl Classroom {
    pub fn new<I, S>(room_number: impl Into<String>, capacity: u32, equipment: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            room_number: room_number.into(),
            capacity,
            equipment: equipment.into_iter().map(Into::into).collect(),
        }
    }

    pub fn room_number(&self) -> &str {
        &self.room_number
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn equipment(&self) -> Vec<String> {
        self.equipment.clone()
    }
}
