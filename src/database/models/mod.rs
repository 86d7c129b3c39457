pub mod employee;
pub mod salary;
pub mod title;
pub mod user;

pub use employee::{Employee, NewEmployee};
pub use salary::{NewSalary, Salary};
pub use title::Title;
pub use user::User;
