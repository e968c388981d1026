//! Success message constants used throughout the application.

// Authentication messages
pub const MSG_LOGIN_SUCCESS: &str = "Login successful";

// User management messages
pub const MSG_USER_FOUND: &str = "User retrieved successfully";
pub const MSG_USERS_RETRIEVED: &str = "Users retrieved successfully";
pub const MSG_USER_CREATED: &str = "User created successfully";
pub const MSG_USER_UPDATED: &str = "User updated successfully";

// Health messages
pub const MSG_SERVER_RUNNING: &str = "Server is running";
pub const MSG_ALL_OPERATIONAL: &str = "All services are operational";
