use bytes::Bytes;

use crate::context::{ReadContext, WriteContext};
use crate::error::PayloadError;
use crate::metadata::{PayloadDescriptor, TypeDescriptor};

/// `PayloadSerializer` 定义"业务对象 → 负载字节"的出站契约。
///
/// # 设计初衷（Why）
/// - 借鉴 `tokio-util::codec::Encoder` 的关联类型模式，以静态类型约束
///   出站业务对象，避免对象层的装箱与动态分发开销；
/// - 写端与读端拆分为两个对称 trait，而非合并的双向契约：宿主框架的
///   写任务与读任务独立装配，二者往往部署在不同进程。
///
/// # 行为逻辑（How）
/// 1. `descriptor` 返回实现所支持的内容类型与业务类型描述；
/// 2. `encode` 将业务对象序列化为负载字节，失败时返回语义化
///    [`PayloadError`]。
///
/// # 契约说明（What）
/// - **关联类型**：`Item` 需满足 `Send + Sync + 'static`，以支持跨线程传输；
/// - **输入**：`WriteContext` 携带宿主框架的写出旁路信息，实现可忽略；
/// - **前置条件**：实例在配置阶段完成全部可变初始化；
/// - **后置条件**：`encode` 不得产生副作用，同一输入必须产出相同字节。
///
/// # 风险提示（Trade-offs）
/// - 契约要求实现自身无每次调用的可变状态，从而天然满足多写端任务并发
///   调用的要求；若实现内部缓存派生值，必须在配置期写入并视为不可变。
pub trait PayloadSerializer: Send + Sync + 'static {
    /// 编码时的业务类型。
    type Item: Send + Sync + 'static;

    /// 返回负载描述符。
    fn descriptor(&self) -> &PayloadDescriptor;

    /// 编码业务对象。
    fn encode(
        &self,
        item: &Self::Item,
        ctx: &WriteContext<'_>,
    ) -> Result<Bytes, PayloadError>;
}

/// `PayloadDeserializer` 定义"负载字节 → 业务对象"的入站契约。
///
/// # 设计初衷（Why）
/// - 与 [`PayloadSerializer`] 对称；额外承担向宿主框架申报产物类型的
///   职责，使读端任务的类型登记完全静态化；
/// - trait 面向下游扩展开放：自定义记录类型的反序列化器由业务侧实现，
///   契约层不做封闭。
///
/// # 行为逻辑（How）
/// 1. `decode` 解析负载字节并构造业务对象；
/// 2. `produced_type` 申报产物类型，默认取自描述符中的类型描述。
///
/// # 契约说明（What）
/// - **输入**：`ReadContext` 携带主题与消息头；域内实现只消费原始字节；
/// - **前置条件**：`payload` 为完整消息体，无需增量拼接；
/// - **后置条件**：要么返回完整业务对象，要么返回语义化错误，无部分结果。
///
/// # 风险提示（Trade-offs）
/// - 解码语义为全有或全无，契约层不提供重试；瞬态故障的补偿由宿主
///   框架的投递语义负责。
pub trait PayloadDeserializer: Send + Sync + 'static {
    /// 解码后的业务类型。
    type Item: Send + Sync + 'static;

    /// 返回负载描述符。
    fn descriptor(&self) -> &PayloadDescriptor;

    /// 解码负载字节。
    fn decode(
        &self,
        payload: &[u8],
        ctx: &ReadContext<'_>,
    ) -> Result<Self::Item, PayloadError>;

    /// 申报解码产物的类型描述，供宿主框架登记。
    fn produced_type(&self) -> TypeDescriptor {
        self.descriptor().payload_type().clone()
    }
}
