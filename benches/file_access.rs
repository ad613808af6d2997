use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tempfile::TempDir;
use textio::file_handler::uppercase;
use textio::FileAccess;

fn create_test_file(dir: &TempDir, size_kb: usize) -> std::path::PathBuf {
    let path = dir.path().join(format!("bench_{}kb.txt", size_kb));
    let target_size = size_kb * 1024;
    let mut content = String::with_capacity(target_size);
    let mut line_num = 0;

    while content.len() < target_size {
        content.push_str(&format!(
            "[2024-09-02T10:{}:{}] INFO: Request {} user_{}\n",
            (line_num / 3600) % 24,
            (line_num / 60) % 60,
            line_num,
            line_num % 1000
        ));
        line_num += 1;
    }

    FileAccess::new()
        .write_all(&path, &content)
        .expect("write bench file");
    path
}

fn size_label(size_kb: usize) -> String {
    if size_kb < 1024 {
        format!("{}KB", size_kb)
    } else {
        format!("{}MB", size_kb / 1024)
    }
}

fn bench_reads(c: &mut Criterion) {
    let dir = TempDir::new().expect("create temp dir");
    let access = FileAccess::new();
    let mut group = c.benchmark_group("reads");
    group.sample_size(20);

    for &size_kb in &[50, 500, 5000] {
        let path = create_test_file(&dir, size_kb);
        let label = size_label(size_kb);

        group.bench_with_input(BenchmarkId::new("read_all", &label), &path, |b, path| {
            b.iter(|| black_box(access.read_all(path, None).unwrap().len()));
        });
        group.bench_with_input(BenchmarkId::new("read_lines", &label), &path, |b, path| {
            b.iter(|| black_box(access.read_lines(path, None).unwrap().len()));
        });
        group.bench_with_input(BenchmarkId::new("read_line", &label), &path, |b, path| {
            b.iter(|| black_box(access.read_line(path).unwrap()));
        });
    }

    group.finish();
}

fn bench_copy_transform(c: &mut Criterion) {
    let dir = TempDir::new().expect("create temp dir");
    let access = FileAccess::new();
    let mut group = c.benchmark_group("copy_transform");
    group.sample_size(10);

    for &size_kb in &[50, 500, 5000] {
        let src = create_test_file(&dir, size_kb);
        let dst = dir.path().join(format!("copy_{}kb.txt", size_kb));

        group.bench_with_input(
            BenchmarkId::new("uppercase", size_label(size_kb)),
            &(src, dst),
            |b, (src, dst)| {
                b.iter(|| black_box(access.copy_transform(src, dst, uppercase).unwrap()));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_reads, bench_copy_transform);
criterion_main!(benches);
