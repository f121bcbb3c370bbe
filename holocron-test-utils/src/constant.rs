//! Placeholder values used across tests. None of these are real credentials.

/// Secret used to sign bearer tokens in tests
pub static TEST_JWT_SECRET: &str = "test_jwt_secret";

/// Lifetime of bearer tokens issued in tests
pub static TEST_JWT_EXPIRY_SECS: i64 = 3600;

/// Password for users registered through the user service in tests
pub static TEST_PASSWORD: &str = "correct horse battery staple";

/// Stored hash of users inserted directly as fixtures, it matches no password
pub static TEST_PASSWORD_HASH: &str = "$argon2id$v=19$m=19456,t=2,p=1$fixture$fixture";
