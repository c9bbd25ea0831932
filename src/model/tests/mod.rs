mod application_status;
mod certificate_dto;
mod course_dto;
mod internship_dto;
mod job_dto;
mod user_dto;
