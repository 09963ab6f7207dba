// Test module for layout
//
// Literal wire cases first, then the calculator in isolation, member
// placement, framing widths and the general invariants under proptest.
