//! Error message constants used throughout the application.

// Authentication errors
pub const ERR_INVALID_CREDENTIALS: &str = "Invalid email or password";

// User errors
pub const ERR_USER_NOT_FOUND: &str = "User not found";
pub const ERR_INVALID_USER_ID: &str = "User ID must be a valid number";
pub const ERR_EMAIL_EXISTS: &str = "Email already registered";
pub const ERR_USERNAME_EXISTS: &str = "Username already taken";
pub const ERR_USERNAME_REQUIRED: &str = "Username cannot be empty";
pub const ERR_EMAIL_REQUIRED: &str = "Email cannot be empty";

// Password errors
pub const ERR_PASSWORD_REQUIRED: &str = "Password cannot be empty";
pub const ERR_PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters";
pub const ERR_PASSWORD_TOO_LONG: &str = "Password must be at most 72 bytes";

// Property errors
pub const ERR_PROPERTY_NOT_FOUND: &str = "Property not found";
pub const ERR_INVALID_PROPERTY_ID: &str = "Property ID must be a positive integer";
pub const ERR_PROPERTY_ID_REQUIRED: &str = "Property ID must be provided";
pub const ERR_ADDRESS_REQUIRED: &str = "Address cannot be empty";
pub const ERR_PRICE_NOT_POSITIVE: &str = "Price must be greater than zero";

// Uniqueness (generic, when the violated column is not known)
pub const ERR_DUPLICATE_FIELD: &str = "A record with the same unique field already exists";

// Generic lookup failure, when the entity is not known
pub const ERR_RECORD_NOT_FOUND: &str = "Record not found";

// Internal errors (client-safe, details stay in the server log)
pub const ERR_INTERNAL: &str = "An internal error occurred";
