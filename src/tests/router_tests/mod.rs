mod apartment_tests;
mod api_tests;
mod calendar_tests;
mod home_tests;
