//! Registration field identifiers and the fixed option sets for select inputs.
//!
//! DESIGN
//! ======
//! `Field` order is document order: the form renders, validates, and focuses
//! fields in the sequence of `Field::ALL`.

#[cfg(test)]
#[path = "fields_test.rs"]
mod fields_test;

/// One input of the registration form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Edp,
    Firstname,
    Middlename,
    Lastname,
    Course,
    Year,
    Status,
    Gender,
    Age,
    Birthday,
    Contact,
    Email,
    Password,
    ProfilePicture,
}

impl Field {
    /// Every field in document order.
    pub const ALL: [Field; 14] = [
        Field::Edp,
        Field::Firstname,
        Field::Middlename,
        Field::Lastname,
        Field::Course,
        Field::Year,
        Field::Status,
        Field::Gender,
        Field::Age,
        Field::Birthday,
        Field::Contact,
        Field::Email,
        Field::Password,
        Field::ProfilePicture,
    ];

    /// Form control `name` attribute.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Field::Edp => "edp",
            Field::Firstname => "firstname",
            Field::Middlename => "middlename",
            Field::Lastname => "lastname",
            Field::Course => "course",
            Field::Year => "year",
            Field::Status => "status",
            Field::Gender => "gender",
            Field::Age => "age",
            Field::Birthday => "birthday",
            Field::Contact => "contact",
            Field::Email => "email",
            Field::Password => "password",
            Field::ProfilePicture => "profilepicture",
        }
    }

    /// DOM id of the field's input, used for labels and focus.
    #[must_use]
    pub fn input_id(self) -> &'static str {
        match self {
            Field::Edp => "register-edp",
            Field::Firstname => "register-firstname",
            Field::Middlename => "register-middlename",
            Field::Lastname => "register-lastname",
            Field::Course => "register-course",
            Field::Year => "register-year",
            Field::Status => "register-status",
            Field::Gender => "register-gender",
            Field::Age => "register-age",
            Field::Birthday => "register-birthday",
            Field::Contact => "register-contact",
            Field::Email => "register-email",
            Field::Password => "register-password",
            Field::ProfilePicture => "register-profilepicture",
        }
    }

    /// Visible label text.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Field::Edp => "EDP Number",
            Field::Firstname => "First Name",
            Field::Middlename => "Middle Name",
            Field::Lastname => "Last Name",
            Field::Course => "Course",
            Field::Year => "Year Level",
            Field::Status => "Status",
            Field::Gender => "Gender",
            Field::Age => "Age",
            Field::Birthday => "Birthday",
            Field::Contact => "Contact Number",
            Field::Email => "School Email",
            Field::Password => "Password",
            Field::ProfilePicture => "Profile Picture",
        }
    }
}

/// A closed set of choices rendered as a `<select>`.
///
/// `value` is what the form stores; `label` is what the user reads.
pub trait FieldOption: Copy + Sized + 'static {
    const ALL: &'static [Self];

    fn value(self) -> &'static str;

    fn label(self) -> &'static str {
        self.value()
    }

    /// Match a stored form value back to its option. Free text never matches.
    fn parse(raw: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|option| option.value() == raw)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Course {
    Bscs,
    Blis,
    Bsis,
}

impl FieldOption for Course {
    const ALL: &'static [Self] = &[Course::Bscs, Course::Blis, Course::Bsis];

    fn value(self) -> &'static str {
        match self {
            Course::Bscs => "BSCS",
            Course::Blis => "BLIS",
            Course::Bsis => "BSIS",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Course::Bscs => "Bachelor of Science in Computer Science",
            Course::Blis => "Bachelor of Library and Information Science",
            Course::Bsis => "Bachelor of Science in Information Systems",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum YearLevel {
    First,
    Second,
    Third,
    Fourth,
}

impl FieldOption for YearLevel {
    const ALL: &'static [Self] = &[YearLevel::First, YearLevel::Second, YearLevel::Third, YearLevel::Fourth];

    fn value(self) -> &'static str {
        match self {
            YearLevel::First => "1st Year",
            YearLevel::Second => "2nd Year",
            YearLevel::Third => "3rd Year",
            YearLevel::Fourth => "4th Year",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnrollmentStatus {
    Regular,
    Irregular,
}

impl FieldOption for EnrollmentStatus {
    const ALL: &'static [Self] = &[EnrollmentStatus::Regular, EnrollmentStatus::Irregular];

    fn value(self) -> &'static str {
        match self {
            EnrollmentStatus::Regular => "Regular Student",
            EnrollmentStatus::Irregular => "Irregular Student",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    PreferNotToSay,
}

impl FieldOption for Gender {
    const ALL: &'static [Self] = &[Gender::Male, Gender::Female, Gender::PreferNotToSay];

    fn value(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::PreferNotToSay => "Prefer not to say",
        }
    }
}

/// `(value, label)` pairs for rendering a select's `<option>` list.
#[must_use]
pub fn option_pairs<T: FieldOption>() -> Vec<(&'static str, &'static str)> {
    T::ALL.iter().map(|option| (option.value(), option.label())).collect()
}
