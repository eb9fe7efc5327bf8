// Thu Jan 15 2026 - Alex

// Stand-ins for a build without a standard library.

pub const SYSTEM_NAMESPACE: &str = "System";
pub const COLLECTIONS_NAMESPACE: &str = "System.Collections";

pub const SYSTEM_STUBS: &[&str] = &[
    "public abstract class ValueType { }",
    "public abstract class Enum : ValueType { }",
    "public class Attribute { }",
    "public abstract class Delegate { }",
    "public abstract class MulticastDelegate : Delegate { }",
    "internal struct IntPtr { }",
    "internal struct UIntPtr { }",
    "public struct RuntimeTypeHandle { }",
    "public struct RuntimeMethodHandle { }",
    "public struct RuntimeFieldHandle { }",
    "public interface IDisposable { }",
    "public sealed class ParamArrayAttribute : Attribute { }",
];

pub const COLLECTIONS_STUBS: &[&str] = &["internal interface IEnumerable { }"];

pub const ATTRIBUTE_TYPES: &str = r#"public class UdonType : System.Attribute
{
    public string UdonName;
    public UdonType(string udonName)
    {
        UdonName = udonName;
    }
}

public class UdonMethod : System.Attribute
{
    public string ExternString;
    public UdonMethod(string externString)
    {
        ExternString = externString;
    }
}

public class UdonSetMethod : UdonMethod
{
    public UdonSetMethod(string externString) : base(externString)
    {
    }
}

public class UdonGetMethod : UdonMethod
{
    public UdonGetMethod(string externString) : base(externString)
    {
    }
}

public class UdonConstructor : UdonMethod
{
    public UdonConstructor(string externString) : base(externString)
    {
    }
}

public class UdonOperator : UdonMethod
{
    public UdonOperator(string externString) : base(externString)
    {
    }
}

namespace System.Runtime.InteropServices
{
    public sealed class OutAttribute : Attribute { }
}

namespace System.Runtime.CompilerServices
{
    public sealed class ExtensionAttribute : Attribute { }
}
"#;

/// Stub lines for a root namespace, empty for every other namespace.
pub fn stubs_for(namespace: &str) -> &'static [&'static str] {
    match namespace {
        SYSTEM_NAMESPACE => SYSTEM_STUBS,
        COLLECTIONS_NAMESPACE => COLLECTIONS_STUBS,
        _ => &[],
    }
}

/// Name of the type a stub line declares.
pub fn stub_type_name(stub: &str) -> Option<&str> {
    let mut words = stub.split_whitespace();
    words.find(|w| matches!(*w, "class" | "struct" | "interface"))?;
    words.next()
}
