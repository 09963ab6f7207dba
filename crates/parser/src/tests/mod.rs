// Test module for parser
//
// Unit tests for the signature parser, organized by category: AST
// construction, grammar rejections, and the depth/length limits.

mod type_tests;
mod error_tests;
