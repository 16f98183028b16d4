use alloc::borrow::Cow;

/// `ContentType` 以 IANA `media-type` 约定描述负载的主语义。
///
/// # 设计背景（Why）
/// - 行业头部框架（gRPC、HTTP/2、Kafka 协议头）均以标准化 MIME 类型标识
///   负载语义，可与各语言生态兼容；
/// - 通过 `Cow<'static, str>` 兼容静态常量与运行时拼装的扩展类型（如携带
///   charset 参数的文本类型），避免过度复制。
///
/// # 契约说明（What）
/// - **前置条件**：传入的媒体类型必须满足 IANA `type/subtype` 格式，推荐全小写；
/// - **后置条件**：实例可安全克隆并长期缓存。
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ContentType(Cow<'static, str>);

impl ContentType {
    /// 创建新的内容类型。
    pub fn new(value: impl Into<Cow<'static, str>>) -> Self {
        Self(value.into())
    }

    /// 返回底层字符串表示。
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// `TypeDescriptor` 是静态声明的业务类型描述，供宿主框架做类型登记。
///
/// # 设计背景（Why）
/// - 宿主框架在装配读端任务时需要知道反序列化产物的类型；以显式声明的
///   描述符取代运行时反射，使登记过程完全静态可查；
/// - `of::<T>()` 基于 `core::any::type_name` 在编译期取得名称，`named`
///   则允许跨语言场景下自定义稳定别名。
///
/// # 契约说明（What）
/// - 描述符只承载名称，不绑定任何运行时注册中心；
/// - **后置条件**：实例可安全克隆、跨线程传递。
///
/// # 风险提示（Trade-offs）
/// - `type_name` 的具体格式不受语义化版本保障，若描述符需要跨进程比对，
///   应改用 `named` 提供的稳定别名。
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TypeDescriptor {
    name: Cow<'static, str>,
}

impl TypeDescriptor {
    /// 以编译期类型名构造描述符。
    pub fn of<T: ?Sized>() -> Self {
        Self {
            name: Cow::Borrowed(core::any::type_name::<T>()),
        }
    }

    /// 以稳定别名构造描述符。
    pub fn named(name: impl Into<Cow<'static, str>>) -> Self {
        Self { name: name.into() }
    }

    /// 返回类型名称。
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// `PayloadDescriptor` 聚合线上表示与类型表示，是编解码契约的最小识别单元。
///
/// # 设计背景（Why）
/// - 编解码器需要同时回答两个问题：字节在线路上是什么（内容类型）、
///   对象在进程内是什么（类型描述）；将两者聚合为一个不可变描述，
///   便于注册、握手比对或写入遥测数据。
///
/// # 契约说明（What）
/// - **前置条件**：内容类型必须与实际负载匹配，否则消费方会解码失败；
/// - **后置条件**：实例可安全地在多线程间共享与克隆。
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PayloadDescriptor {
    content_type: ContentType,
    payload_type: TypeDescriptor,
}

impl PayloadDescriptor {
    /// 构建新的描述符。
    pub fn new(content_type: ContentType, payload_type: TypeDescriptor) -> Self {
        Self {
            content_type,
            payload_type,
        }
    }

    /// 获取内容类型。
    pub fn content_type(&self) -> &ContentType {
        &self.content_type
    }

    /// 获取业务类型描述。
    pub fn payload_type(&self) -> &TypeDescriptor {
        &self.payload_type
    }
}
