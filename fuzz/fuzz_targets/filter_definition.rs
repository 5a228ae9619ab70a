#![no_main]

use data_filter::services::filter::FilterExpression;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
	let raw = String::from_utf8_lossy(data);
	if let Ok(expression) = FilterExpression::from_json(&raw) {
		let _ = expression.render();
	}
});
