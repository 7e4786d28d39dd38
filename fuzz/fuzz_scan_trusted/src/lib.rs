pub fn de(input: &[u8]) {
    // Neither pipeline should ever panic, for any input whatsoever.
    let _ = ecjp::token::check_syntax(input);
    let _ = ecjp::token::load(input, 0);
    let _ = ecjp::capture::load(input, 0);
}
