pub mod cms;
pub mod contact;
pub mod home;
pub mod pages;
pub mod project;
