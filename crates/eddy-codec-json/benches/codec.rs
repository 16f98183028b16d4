use criterion::{Criterion, criterion_group, criterion_main};

use eddy_codec_json::{JsonPayloadDeserializer, JsonPayloadSerializer};
use eddy_codecs::{PayloadDeserializer, PayloadSerializer, ReadContext, WriteContext};

/// 小型对象负载的编解码往返基准。
///
/// # 设计目的（Why）
/// - 连接器的典型负载是数十字节量级的小 JSON 对象，编解码位于每条
///   消息的热路径上；基准用于监控该路径的回归。
///
/// # 执行逻辑（How）
/// - 使用 `Criterion::bench_function` 分别注册解码与编码两个基准，
///   框架自动处理 warmup/measurement。
///
/// # 风险提示（Trade-offs）
/// - 单一样例无法反映深层嵌套或长字符串场景；如需更全面的画像，
///   应按负载形态补充基准矩阵。
fn bench_small_object(c: &mut Criterion) {
    let serializer = JsonPayloadSerializer::new();
    let deserializer = JsonPayloadDeserializer::new();
    let payload = br#"{"word":"hello","count":3}"#;
    let tree = deserializer
        .decode(payload, &ReadContext::new())
        .expect("sample parses");

    c.bench_function("json_decode_small_object", |b| {
        b.iter(|| {
            deserializer
                .decode(payload, &ReadContext::new())
                .expect("sample parses")
        })
    });
    c.bench_function("json_encode_small_object", |b| {
        b.iter(|| {
            serializer
                .encode(&tree, &WriteContext::new())
                .expect("sample renders")
        })
    });
}

criterion_group!(codec_benches, bench_small_object);
criterion_main!(codec_benches);
