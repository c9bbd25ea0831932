use dioxus::prelude::*;

use crate::client::{
    components::{admin::AdminLayout, Navbar},
    routes::{
        admin::{AdminDashboard, AdminJobs},
        About, Certificates, Contact, CourseDetail, Courses, Home, Internships, Login, Mock,
        NotFound, Placement, Profile, Projects, Register, Student,
    },
};

use crate::client::routes::NotFound as AdminNotFound;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/")]
    Home {},

    #[route("/courses")]
    Courses {},

    #[route("/courses/:course_id")]
    CourseDetail { course_id: String },

    #[route("/about")]
    About {},

    #[route("/contact")]
    Contact {},

    #[route("/login")]
    Login {},

    #[route("/register")]
    Register {},

    #[route("/profile")]
    Profile {},

    #[route("/mock")]
    Mock {},

    #[route("/certificates")]
    Certificates {},

    #[route("/internships")]
    Internships {},

    #[route("/projects")]
    Projects {},

    #[route("/placement")]
    Placement {},

    #[route("/students/:student_id")]
    Student { student_id: String },

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },

    #[end_layout]

    #[nest("/admin")]

        #[layout(AdminLayout)]

        #[route("/")]
        AdminDashboard {},

        #[route("/jobs")]
        AdminJobs {},

        #[route("/:..segments")]
        AdminNotFound { segments: Vec<String> },
}
