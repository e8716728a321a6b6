#![no_main]
use jsonshape::Dynamic;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(value) = serde_json::from_slice::<serde_json::Value>(data) {
        let input = Dynamic::from(&value);
        let validator = jsonshape::options().with_max_depth(64).build();
        let result = validator.validate(&input);
        assert_eq!(result.is_ok(), validator.is_valid(&input));
        if let Ok(validated) = result {
            assert_eq!(validated, value);
        }
    }
});
