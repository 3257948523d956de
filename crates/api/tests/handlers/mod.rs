mod appointment_test;
mod middleware_test;
