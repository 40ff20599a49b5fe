mod attendance_test;
mod middleware_test;
