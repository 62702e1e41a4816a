//! Sample supplier feed documents.

/// Two well-formed products and one without a `ProductId`.
pub const SAMPLE_FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Products>
  <Product ProductId="6H2RKH" Name="Kadın Elbise">
    <Images>
      <Image Path="https://cdn.example.com/6H2RKH-1.jpg"/>
      <Image Path="https://cdn.example.com/6H2RKH-2.jpg"/>
    </Images>
    <ProductDetails>
      <ProductDetail Name="Price" Value="5,49"/>
      <ProductDetail Name="DiscountedPrice" Value="4,10"/>
      <ProductDetail Name="ProductType" Value="Elbise"/>
      <ProductDetail Name="Quantity" Value="12"/>
      <ProductDetail Name="Color" Value="Kırmızı"/>
      <ProductDetail Name="Color" Value="Siyah"/>
      <ProductDetail Name="Series" Value="2S-1M-1L"/>
    </ProductDetails>
    <Description><![CDATA[<ul><li><strong>Ürün Bilgisi:</strong> Kruvaze yaka midi elbise</li><li><strong>Kumaş Bilgisi:</strong> %100 Viskon</li><li><strong>Ürün Ölçüleri:</strong> Boy: 120 cm</li><li><strong>Model Ölçüleri:</strong> Boy: 1.76, Göğüs: 84</li><li><strong>Not:</strong> Bu satır okunmaz</li></ul>]]></Description>
  </Product>
  <Product ProductId="9KQ1ZT">
    <Images>
      <Image Path="https://cdn.example.com/9KQ1ZT-1.jpg"/>
    </Images>
    <ProductDetails>
      <ProductDetail Name="Price" Value="7,00"/>
      <ProductDetail Name="DiscountedPrice" Value="0"/>
      <ProductDetail Name="ProductType" Value="Bluz"/>
      <ProductDetail Name="Quantity" Value="4"/>
      <ProductDetail Name="Color" Value="Beyaz"/>
    </ProductDetails>
    <Description>&lt;ul&gt;&lt;li&gt;&lt;strong&gt;Ürün Bilgisi:&lt;/strong&gt; Saten bluz&lt;/li&gt;&lt;/ul&gt;</Description>
  </Product>
  <Product Name="Kimliksiz">
    <ProductDetails>
      <ProductDetail Name="Price" Value="1,00"/>
    </ProductDetails>
  </Product>
</Products>
"#;
