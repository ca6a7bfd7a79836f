use criterion::{black_box, criterion_group, criterion_main, Criterion};
use astra::{
    astra_buffer_free, astra_profile_default, astra_session_free, astra_session_new,
    astra_session_transform, AstraRecord,
};
use std::os::raw::c_char;
use std::ptr;

fn bench_transform_release(c: &mut Criterion) {
    let lines: Vec<String> = (0..1000).map(|i| format!("  record {i} payload  ")).collect();
    let mut profile = astra_profile_default();
    profile.to_upper = true;

    c.bench_function("ffi_transform_release_1000", |b| {
        b.iter(|| unsafe {
            let mut session = ptr::null_mut();
            astra_session_new(profile, &mut session);
            for line in &lines {
                let mut record = AstraRecord::suppressed();
                astra_session_transform(session, line.as_ptr() as *const c_char, line.len(), &mut record);
                black_box(&record);
                astra_buffer_free(record);
            }
            astra_session_free(session);
        })
    });
}

criterion_group!(benches, bench_transform_release);
criterion_main!(benches);
