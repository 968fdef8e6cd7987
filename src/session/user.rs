use serde::{Deserialize, Serialize};

/// Role attached to an account. Teachers see the upload surface, students
/// the library; the core only uses the role to pick which partitions and
/// features the surrounding app enables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Student,
    Teacher,
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Student => write!(f, "student"),
            UserRole::Teacher => write!(f, "teacher"),
        }
    }
}

/// An authenticated account. Cleared (not deleted from any store) on logout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub role: UserRole,
}

impl User {
    pub fn new(id: &str, username: &str, role: UserRole) -> Self {
        User {
            id: id.to_string(),
            username: username.to_string(),
            role,
        }
    }
}

/// A username/password pair backing the local (offline) login path.
#[derive(Debug, Clone)]
pub struct Credential {
    pub user: User,
    pub password: String,
}

impl Credential {
    pub fn new(id: &str, username: &str, password: &str, role: UserRole) -> Self {
        Credential {
            user: User::new(id, username, role),
            password: password.to_string(),
        }
    }
}

/// The built-in demo accounts used when no remote auth backend is wired in.
pub fn demo_credentials() -> Vec<Credential> {
    vec![
        Credential::new("1", "student1", "student123", UserRole::Student),
        Credential::new("2", "teacher1", "teacher123", UserRole::Teacher),
        Credential::new("3", "john_student", "password", UserRole::Student),
        Credential::new("4", "mary_teacher", "password", UserRole::Teacher),
    ]
}
