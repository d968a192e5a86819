use internlink_auth::Role;

use crate::{Admin, Company, Student, Supervisor};

/// Any authenticated account, tagged by role.
#[derive(Debug, Clone)]
pub enum Principal {
    Admin(Admin),
    Supervisor(Supervisor),
    Student(Student),
    Company(Company),
}

impl Principal {
    pub fn email(&self) -> &str {
        match self {
            Principal::Admin(a) => &a.email,
            Principal::Supervisor(s) => &s.email,
            Principal::Student(s) => &s.email,
            Principal::Company(c) => &c.email,
        }
    }

    pub fn role(&self) -> Role {
        match self {
            Principal::Admin(_) => Role::Admin,
            Principal::Supervisor(_) => Role::Supervisor,
            Principal::Student(_) => Role::Student,
            Principal::Company(_) => Role::Company,
        }
    }
}
