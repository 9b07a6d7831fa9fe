//! Edge case tests for wiig-lex
