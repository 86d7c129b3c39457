pub mod employee;
pub mod salary;
pub mod title;
pub mod user;

pub use employee::EmployeeRepo;
pub use salary::SalaryRepo;
pub use title::TitleRepo;
pub use user::UserRepo;
