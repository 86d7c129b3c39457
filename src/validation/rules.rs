//! Static per-entity rule tables and their message tables.
//!
//! Each rule table is an ordered list of `(field, pipe-delimited constraints)`
//! pairs; message tables map `"field.rule"` keys to the human-readable strings
//! the API returns verbatim.

pub type RuleTable = &'static [(&'static str, &'static str)];
pub type MessageTable = &'static [(&'static str, &'static str)];

// Employee

pub const ADD_NEW_EMPLOYEE: RuleTable = &[
    ("emp_no", "required|unique:employees"),
    ("firstname", "required|min:5|max:20"),
    ("gender", "in:m,f|required"),
    ("hiredate", "date_format:YYYY-MM-DD|required"),
];

/// Same as [`ADD_NEW_EMPLOYEE`] minus the key, which an update never changes.
pub const UPDATE_EMPLOYEE: RuleTable = &[
    ("firstname", "required|min:5|max:20"),
    ("gender", "in:m,f|required"),
    ("hiredate", "date_format:YYYY-MM-DD|required"),
];

pub const ADD_EMPLOYEE_ERROR: MessageTable = &[
    ("emp_no.required", "Employee no required"),
    ("emp_no.unique", "Already this Employee no registered"),
    ("firstname.required", "firstname is required"),
    ("firstname.min", "firstname should be min 5 characters"),
    ("firstname.max", "firstname not more than max 20 characters"),
    ("hiredate.date_format", "date format should be like this:YYYY-MM-DD"),
    ("hiredate.required", "hiredate should be need"),
    ("gender.required", "gender should be mention"),
    ("gender.in", "gender m,f format only"),
];

// Salary

pub const ADD_EMP_SALARY: RuleTable = &[
    ("salary", "required"),
    ("from_date", "date_format:YYYY-MM-DD|required"),
    ("to_date", "date_format:YYYY-MM-DD|required"),
];

pub const ADD_EMP_SALARY_ERROR: MessageTable = &[
    ("from_date.date_format", "date format should be like this:YYYY-MM-DD"),
    ("salary.required", "salary field required"),
    ("from_date.required", "from_date should be need"),
    ("to_date.date_format", "date format should be like this:YYYY-MM-DD"),
    ("to_date.required", "to_date should be need"),
];

// Title

pub const TITLE_UPDATE: RuleTable = &[
    ("title", "required"),
    ("emp_no", "required"),
    ("from_date", "date_format:YYYY-MM-DD|required"),
    ("to_date", "date_format:YYYY-MM-DD|required"),
];

pub const TITLE_UPDATE_MESSAGE: MessageTable = &[
    ("title.required", "title field required"),
    ("emp_no.required", "Employee no required"),
    ("from_date.date_format", "date format should be like this:YYYY-MM-DD"),
    ("from_date.required", "from_date should be need"),
    ("to_date.date_format", "date format should be like this:YYYY-MM-DD"),
    ("to_date.required", "to_date should be need"),
];

// User

pub const NEW_USER_ADD_RULES: RuleTable = &[
    ("email", "required|email|unique:users"),
    ("password", "required"),
];

pub const NEW_USER_MESSAGE: MessageTable = &[
    ("email.required", "Enter email address to be used for login"),
    ("email.email", "Email address not valied"),
    ("email.max", "Email address not more than 50 character"),
    ("email.unique", "There's already an account with this email address"),
    ("password.required", "password required"),
];
