// Test module for lexer
//
// Unit tests for the signature lexer, split between valid codes and rejected input.
